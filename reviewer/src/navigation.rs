//! Orchestrates cursor transitions with position recomputation and view
//! refreshes. This is what the UI's input handlers call.

use crate::evaluation::EvaluationDisplay;
use crate::session::Session;
use chess::{OracleError, PositionOracle};

/// Move-list highlighting, implemented by the renderer.
pub trait Highlighter {
    fn clear(&mut self, index: usize);
    fn set(&mut self, index: usize);
}

/// Board and evaluation meter, implemented by the renderer.
pub trait BoardRenderer {
    fn show_position(&mut self, position: &str);
    /// `None` when the half-move has no review.
    fn show_evaluation(&mut self, evaluation: Option<&EvaluationDisplay>);
}

pub trait BoardView: Highlighter + BoardRenderer {}

impl<T: Highlighter + BoardRenderer> BoardView for T {}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved {
        from: Option<usize>,
        to: Option<usize>,
    },
    /// Nothing to do: end of list, first move, same index, or no game loaded.
    Unchanged,
}

/// Claim on the session slot taken when a load starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("Failed to compute position: {0}")]
    Oracle(#[from] OracleError),
}

pub struct NavigationController<O> {
    oracle: O,
    session: Option<Session>,
    issued: u64,
}

impl<O: PositionOracle> NavigationController<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            session: None,
            issued: 0,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Position string on screen, if any.
    pub fn current_position(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(Session::position)
            .filter(|p| !p.is_empty())
    }

    /// Notation text of the loaded game, if any.
    pub fn current_notation(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(Session::notation)
            .filter(|n| !n.trim().is_empty())
    }

    /// Start a load. Only the newest ticket can install its session.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Replace the active session if `ticket` is still the newest load.
    /// Returns false and discards `session` otherwise.
    pub fn install(
        &mut self,
        ticket: LoadTicket,
        session: Session,
        view: &mut impl BoardView,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                newest = self.issued,
                hash = %session.hash(),
                "Discarding superseded load"
            );
            return false;
        }

        if let Some(index) = self.session.as_ref().and_then(Session::index) {
            view.clear(index);
        }
        tracing::info!(
            hash = %session.hash(),
            half_moves = session.cursor().len(),
            reviewed = session.review().moves.len(),
            "Session installed"
        );
        self.session = Some(session);
        self.render(view);
        true
    }

    /// Repaint the current state without moving.
    pub fn render(&self, view: &mut impl BoardView) {
        let Some(session) = &self.session else {
            return;
        };
        view.show_position(session.position());
        if let Some(index) = session.index() {
            view.set(index);
        }
        view.show_evaluation(session.evaluation().as_ref());
    }

    /// Step one half-move forward, applying just that move to the position.
    pub fn forward(&mut self, view: &mut impl BoardView) -> Result<NavOutcome, NavigationError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(NavOutcome::Unchanged);
        };

        let mut cursor = session.cursor.clone();
        let Some(san) = cursor.forward() else {
            return Ok(NavOutcome::Unchanged);
        };
        let position = self.oracle.apply_move(&session.position, san)?;

        let from = session.cursor.index();
        session.cursor = cursor;
        session.position = position;
        Ok(Self::refresh(session, from, view))
    }

    /// Step one half-move back, replaying the game up to the new index.
    pub fn backward(&mut self, view: &mut impl BoardView) -> Result<NavOutcome, NavigationError> {
        self.transition(view, |cursor| cursor.backward())
    }

    /// Jump to half-move `target`, replaying the game up to it.
    pub fn seek(
        &mut self,
        target: usize,
        view: &mut impl BoardView,
    ) -> Result<NavOutcome, NavigationError> {
        self.transition(view, |cursor| cursor.seek(target))
    }

    pub fn seek_first(&mut self, view: &mut impl BoardView) -> Result<NavOutcome, NavigationError> {
        self.seek(0, view)
    }

    pub fn seek_last(&mut self, view: &mut impl BoardView) -> Result<NavOutcome, NavigationError> {
        let len = self.session.as_ref().map_or(0, |s| s.cursor.len());
        match len.checked_sub(1) {
            Some(last) => self.seek(last, view),
            None => Ok(NavOutcome::Unchanged),
        }
    }

    /// Move the cursor with `step` and recompute the position by prefix replay.
    /// The session is only updated once the new position is known.
    fn transition(
        &mut self,
        view: &mut impl BoardView,
        step: impl FnOnce(&mut crate::cursor::MoveCursor) -> bool,
    ) -> Result<NavOutcome, NavigationError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(NavOutcome::Unchanged);
        };

        let mut cursor = session.cursor.clone();
        if !step(&mut cursor) {
            return Ok(NavOutcome::Unchanged);
        }
        let position = self.oracle.position_at(&session.game, cursor.index())?;

        let from = session.cursor.index();
        session.cursor = cursor;
        session.position = position;
        Ok(Self::refresh(session, from, view))
    }

    fn refresh(session: &Session, from: Option<usize>, view: &mut impl BoardView) -> NavOutcome {
        let to = session.index();
        if let Some(index) = from {
            view.clear(index);
        }
        view.show_position(session.position());
        if let Some(index) = to {
            view.set(index);
        }
        view.show_evaluation(session.evaluation().as_ref());
        tracing::debug!(?from, ?to, "Navigated");
        NavOutcome::Moved { from, to }
    }
}
