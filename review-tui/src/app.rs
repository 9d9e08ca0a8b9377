//! Application state and the reactions to user actions and fetch results.
//!
//! Everything here is synchronous. Work that needs I/O is handed back to the
//! render loop as an [`Effect`].

use crate::clipboard::ClipboardSink;
use crate::loader::LoadEvent;
use crate::view::ReviewView;
use ratatui::layout::Rect;
use reviewer::{
    CatalogEntry, Configuration, LoadTicket, MoveRow, NavOutcome, NavigationController,
    NavigationError, PgnOracle, ReviewIndex, Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Catalog,
    Moves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Backward,
    Forward,
    First,
    Last,
    SelectPrevious,
    SelectNext,
    OpenSelected,
    ToggleFavorite,
    Refresh,
    CopyPosition,
    CopyNotation,
    SwitchFocus,
    PreviousRow,
    NextRow,
    /// Seek to a half-move index.
    SeekTo(usize),
    /// Select a catalog row and load it.
    OpenRow(usize),
    Quit,
}

/// Work the render loop must start on behalf of the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    LoadReview(LoadTicket, CatalogEntry),
    LoadCatalog(Option<Configuration>),
}

/// Screen regions from the last frame, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hitboxes {
    /// Catalog body, below the header row.
    pub catalog: Rect,
    pub catalog_offset: usize,
    /// Move table body.
    pub moves: Rect,
    pub moves_offset: usize,
    /// Horizontal spans of the White and Black columns.
    pub white_column: (u16, u16),
    pub black_column: (u16, u16),
}

pub struct App {
    index: ReviewIndex,
    navigation: NavigationController<PgnOracle>,
    view: ReviewView,
    clipboard: Box<dyn ClipboardSink>,
    configuration: Option<Configuration>,
    selected: Option<usize>,
    focus: Focus,
    status: Option<Status>,
    pub hitboxes: Hitboxes,
}

impl App {
    pub fn new(index: ReviewIndex, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            index,
            navigation: NavigationController::new(PgnOracle),
            view: ReviewView::default(),
            clipboard,
            configuration: None,
            selected: None,
            focus: Focus::default(),
            status: None,
            hitboxes: Hitboxes::default(),
        }
    }

    pub fn index(&self) -> &ReviewIndex {
        &self.index
    }

    pub fn session(&self) -> Option<&Session> {
        self.navigation.session()
    }

    pub fn view(&self) -> &ReviewView {
        &self.view
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn move_rows(&self) -> Vec<MoveRow> {
        self.session().map(Session::move_table).unwrap_or_default()
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::Backward => self.navigate(|nav, view| nav.backward(view)),
            Action::Forward => self.navigate(|nav, view| nav.forward(view)),
            Action::First => self.navigate(|nav, view| nav.seek_first(view)),
            Action::Last => self.navigate(|nav, view| nav.seek_last(view)),
            Action::SeekTo(index) => self.navigate(|nav, view| nav.seek(index, view)),
            Action::PreviousRow => self.step_rows(false),
            Action::NextRow => self.step_rows(true),
            Action::SelectPrevious => {
                if let Some(selected) = self.selected {
                    self.selected = Some(selected.saturating_sub(1));
                }
                Effect::None
            }
            Action::SelectNext => {
                if let Some(selected) = self.selected {
                    self.selected = Some((selected + 1).min(self.index.len().saturating_sub(1)));
                }
                Effect::None
            }
            Action::OpenRow(row) => {
                if row >= self.index.len() {
                    return Effect::None;
                }
                self.selected = Some(row);
                self.open_selected()
            }
            Action::OpenSelected => self.open_selected(),
            Action::ToggleFavorite => {
                self.toggle_favorite();
                Effect::None
            }
            Action::Refresh => {
                self.info("Refreshing catalog");
                Effect::LoadCatalog(self.configuration.clone())
            }
            Action::CopyPosition => {
                let text = self.navigation.current_position().map(str::to_owned);
                self.copy(text, "Position");
                Effect::None
            }
            Action::CopyNotation => {
                let text = self.navigation.current_notation().map(str::to_owned);
                self.copy(text, "Notation");
                Effect::None
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Catalog => Focus::Moves,
                    Focus::Moves => Focus::Catalog,
                };
                Effect::None
            }
            Action::Quit => Effect::Quit,
        }
    }

    pub fn on_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Configuration(configuration) => {
                self.configuration = Some(configuration);
            }
            LoadEvent::Catalog(Ok(entries)) => {
                let keep = self
                    .selected
                    .and_then(|row| self.index.entries().get(row))
                    .map(|entry| entry.hash.clone());
                self.index.load_catalog(entries);
                self.selected = keep
                    .and_then(|hash| self.index.position_of(&hash))
                    .or_else(|| (!self.index.is_empty()).then_some(0));
                self.info(format!("{} reviewed games", self.index.len()));
            }
            LoadEvent::Catalog(Err(e)) => {
                tracing::error!("Failed to refresh catalog: {}", e);
                self.error(format!("Unable to refresh reviews: {e}"));
            }
            LoadEvent::Review {
                ticket,
                entry,
                result,
            } => self.on_review(ticket, entry, result),
        }
    }

    fn on_review(
        &mut self,
        ticket: LoadTicket,
        entry: CatalogEntry,
        result: review_client::ClientResult<reviewer::ReviewDocument>,
    ) {
        if !self.navigation.is_current(ticket) {
            tracing::debug!(hash = %entry.hash, "Ignoring superseded review");
            return;
        }

        let review = match result {
            Ok(review) => review,
            Err(e) => {
                tracing::error!(hash = %entry.hash, "Failed to load review: {}", e);
                self.error(format!("Failed to load review: {e}"));
                return;
            }
        };

        match Session::open(self.navigation.oracle(), &entry, review) {
            Ok(session) => {
                if self.navigation.install(ticket, session, &mut self.view) {
                    self.info(format!("{} vs {}", entry.white, entry.black));
                }
            }
            Err(e) => {
                tracing::error!(hash = %entry.hash, "Cannot replay game: {}", e);
                self.error(format!("Cannot replay game: {e}"));
            }
        }
    }

    fn open_selected(&mut self) -> Effect {
        let Some(entry) = self
            .selected
            .and_then(|row| self.index.entries().get(row))
            .cloned()
        else {
            return Effect::None;
        };
        let ticket = self.navigation.begin_load();
        self.info(format!("Loading {} vs {}", entry.white, entry.black));
        Effect::LoadReview(ticket, entry)
    }

    fn navigate(
        &mut self,
        step: impl FnOnce(
            &mut NavigationController<PgnOracle>,
            &mut ReviewView,
        ) -> Result<NavOutcome, NavigationError>,
    ) -> Effect {
        if let Err(e) = step(&mut self.navigation, &mut self.view) {
            tracing::warn!("Navigation failed: {}", e);
            self.error(e.to_string());
        }
        Effect::None
    }

    fn step_rows(&mut self, down: bool) -> Effect {
        let Some(session) = self.session() else {
            return Effect::None;
        };
        let (Some(index), Some(last)) = (session.index(), session.cursor().len().checked_sub(1))
        else {
            return Effect::None;
        };
        let target = if down {
            (index + 2).min(last)
        } else {
            index.saturating_sub(2)
        };
        self.navigate(|nav, view| nav.seek(target, view))
    }

    fn toggle_favorite(&mut self) {
        let Some(hash) = self
            .selected
            .and_then(|row| self.index.entries().get(row))
            .map(|entry| entry.hash.clone())
        else {
            return;
        };
        let (favorite, saved) = self.index.toggle_favorite(&hash);
        match saved {
            Ok(()) if favorite => self.info("Added to favorites"),
            Ok(()) => self.info("Removed from favorites"),
            Err(e) => {
                tracing::warn!(%hash, "Failed to save favorites: {}", e);
                self.error(format!("Favorite not saved: {e}"));
            }
        }
    }

    fn copy(&mut self, text: Option<String>, what: &str) {
        let Some(text) = text else {
            self.info("No game loaded");
            return;
        };
        match self.clipboard.copy(&text) {
            Ok(()) => self.info(format!("{what} copied")),
            Err(e) => {
                tracing::warn!("{} copy failed: {}", what, e);
                self.error(format!("{what} not copied: {e}"));
            }
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }
}
