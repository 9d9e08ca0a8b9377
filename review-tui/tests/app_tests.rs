//! Drives the app the way the render loop does: actions in, effects out,
//! fetch results fed back as events.

use review_client::{CatalogEntry, ClientError, Configuration, MockReviewService, ReviewDocument};
use review_tui::clipboard::{ClipboardError, ClipboardSink};
use review_tui::loader::refresh_catalog;
use review_tui::{Action, App, Effect, Focus, LoadEvent, StatusKind};
use reviewer::{FavoriteStore, PersistenceError, PgnOracle, PositionOracle, ReviewIndex, ReviewPaths};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const RUY_LOPEZ: &str = "[White \"Alice\"]\n[Black \"Bob\"]\n\n1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 1-0";
const SICILIAN: &str = "1. e4 c5 2. Nf3 d6 *";
const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Position after the first move of the Ruy Lopez game.
fn after_e4() -> String {
    let game = PgnOracle.load(RUY_LOPEZ).unwrap();
    PgnOracle.position_at(&game, Some(0)).unwrap()
}

#[derive(Clone, Default)]
struct Store {
    fail: bool,
    saved: Arc<Mutex<Vec<HashMap<String, bool>>>>,
}

impl FavoriteStore for Store {
    fn load(&self) -> Result<HashMap<String, bool>, PersistenceError> {
        Ok(HashMap::new())
    }

    fn save(&self, favorites: &HashMap<String, bool>) -> Result<(), PersistenceError> {
        if self.fail {
            return Err(PersistenceError::Io(std::io::Error::other("read-only")));
        }
        self.saved.lock().unwrap().push(favorites.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Clipboard {
    fail: bool,
    copied: Arc<Mutex<Vec<String>>>,
}

impl ClipboardSink for Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(arboard::Error::ClipboardNotSupported.into());
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn entry(hash: &str, white: &str, pgn: &str, moves: usize) -> CatalogEntry {
    CatalogEntry {
        hash: hash.to_string(),
        path: format!("reviews/{hash}.json"),
        white: white.to_string(),
        black: "Bob".to_string(),
        date: "2024.02.01".to_string(),
        actual_result: "1-0".to_string(),
        moves: vec![serde_json::Value::Null; moves],
        pgn: pgn.to_string(),
    }
}

fn catalog() -> Vec<CatalogEntry> {
    vec![
        entry("ruy", "Alice", RUY_LOPEZ, 6),
        entry("sic", "Carol", SICILIAN, 4),
    ]
}

fn configuration() -> Configuration {
    Configuration {
        paths: ReviewPaths {
            gathered_reviews: "reviews/gathered.json".to_string(),
        },
    }
}

fn review(evaluations: &[f64]) -> ReviewDocument {
    let moves: Vec<_> = evaluations
        .iter()
        .map(|e| serde_json::json!({ "evaluation": e, "classification": { "type": "none" } }))
        .collect();
    serde_json::from_value(serde_json::json!({ "moves": moves })).unwrap()
}

fn app_with(store: Store, clipboard: Clipboard) -> App {
    let index = ReviewIndex::new(Box::new(store)).unwrap();
    let mut app = App::new(index, Box::new(clipboard));
    app.on_event(LoadEvent::Configuration(configuration()));
    app.on_event(LoadEvent::Catalog(Ok(catalog())));
    app
}

fn app() -> App {
    app_with(Store::default(), Clipboard::default())
}

/// Open the selected row and deliver `result` for it.
fn open(app: &mut App, action: Action, result: Result<ReviewDocument, ClientError>) {
    match app.apply(action) {
        Effect::LoadReview(ticket, entry) => app.on_event(LoadEvent::Review {
            ticket,
            entry,
            result,
        }),
        other => panic!("expected a review load, got {other:?}"),
    }
}

#[test]
fn catalog_load_selects_first_row() {
    let app = app();
    assert_eq!(app.index().len(), 2);
    assert_eq!(app.selected(), Some(0));
    assert_eq!(app.status().unwrap().kind, StatusKind::Info);
    assert!(app.session().is_none());
}

#[test]
fn opening_a_game_shows_first_move() {
    let mut app = app();
    open(&mut app, Action::OpenSelected, Ok(review(&[0.3, 0.2])));

    let session = app.session().unwrap();
    assert_eq!(session.hash(), "ruy");
    assert_eq!(app.view().position(), after_e4());
    assert_eq!(app.view().highlighted(), Some(0));
    assert_eq!(app.view().evaluation().unwrap().display_value, "0.3");
}

#[test]
fn arrows_walk_the_game() {
    let mut app = app();
    open(&mut app, Action::OpenSelected, Ok(review(&[0.3])));

    assert_eq!(app.apply(Action::Forward), Effect::None);
    assert_eq!(app.view().highlighted(), Some(1));
    // past the reviewed prefix the meter goes neutral
    assert!(app.view().evaluation().is_none());

    app.apply(Action::Last);
    assert_eq!(app.view().highlighted(), Some(5));
    app.apply(Action::Forward);
    assert_eq!(app.view().highlighted(), Some(5));

    app.apply(Action::First);
    assert_eq!(app.view().highlighted(), Some(0));
    app.apply(Action::Backward);
    assert_eq!(app.view().position(), after_e4());
}

#[test]
fn move_table_rows_step_two_half_moves() {
    let mut app = app();
    open(&mut app, Action::OpenSelected, Ok(review(&[])));
    app.apply(Action::SwitchFocus);
    assert_eq!(app.focus(), Focus::Moves);

    app.apply(Action::NextRow);
    assert_eq!(app.view().highlighted(), Some(2));
    app.apply(Action::NextRow);
    app.apply(Action::NextRow);
    assert_eq!(app.view().highlighted(), Some(5));
    app.apply(Action::PreviousRow);
    assert_eq!(app.view().highlighted(), Some(3));
    app.apply(Action::SeekTo(0));
    assert_eq!(app.view().highlighted(), Some(0));
}

#[test]
fn newest_load_wins_regardless_of_arrival_order() {
    let mut app = app();
    let Effect::LoadReview(first, ruy) = app.apply(Action::OpenRow(0)) else {
        panic!("expected load");
    };
    let Effect::LoadReview(second, sic) = app.apply(Action::OpenRow(1)) else {
        panic!("expected load");
    };

    app.on_event(LoadEvent::Review {
        ticket: second,
        entry: sic,
        result: Ok(review(&[])),
    });
    app.on_event(LoadEvent::Review {
        ticket: first,
        entry: ruy,
        result: Ok(review(&[])),
    });

    assert_eq!(app.session().unwrap().hash(), "sic");
    assert_eq!(app.selected(), Some(1));
}

#[test]
fn failed_load_keeps_current_session() {
    let mut app = app();
    open(&mut app, Action::OpenSelected, Ok(review(&[])));
    app.apply(Action::Forward);

    open(
        &mut app,
        Action::OpenRow(1),
        Err(ClientError::RefreshFailed("offline".into())),
    );

    assert_eq!(app.session().unwrap().hash(), "ruy");
    assert_eq!(app.view().highlighted(), Some(1));
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn unreadable_notation_is_an_error_not_a_session() {
    let mut app = app_with(Store::default(), Clipboard::default());
    app.on_event(LoadEvent::Catalog(Ok(vec![entry("bad", "X", "1. e4 Ke3 *", 2)])));
    open(&mut app, Action::OpenSelected, Ok(review(&[])));
    assert!(app.session().is_none());
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn copy_position_and_notation() {
    let clipboard = Clipboard::default();
    let mut app = app_with(Store::default(), clipboard.clone());

    app.apply(Action::CopyPosition);
    assert!(clipboard.copied.lock().unwrap().is_empty());

    open(&mut app, Action::OpenSelected, Ok(review(&[])));
    app.apply(Action::CopyPosition);
    app.apply(Action::CopyNotation);
    assert_eq!(
        *clipboard.copied.lock().unwrap(),
        vec![after_e4(), RUY_LOPEZ.to_string()]
    );
}

#[test]
fn clipboard_failure_does_not_block_navigation() {
    let mut app = app_with(
        Store::default(),
        Clipboard {
            fail: true,
            ..Default::default()
        },
    );
    open(&mut app, Action::OpenSelected, Ok(review(&[])));
    app.apply(Action::CopyPosition);
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);

    app.apply(Action::Forward);
    assert_eq!(app.view().highlighted(), Some(1));
}

#[test]
fn favorite_toggle_persists_and_survives_failure() {
    let store = Store::default();
    let mut app = app_with(store.clone(), Clipboard::default());
    app.apply(Action::ToggleFavorite);
    assert!(app.index().is_favorite("ruy"));
    assert_eq!(store.saved.lock().unwrap().len(), 1);

    let mut failing = app_with(
        Store {
            fail: true,
            ..Default::default()
        },
        Clipboard::default(),
    );
    failing.apply(Action::SelectNext);
    failing.apply(Action::ToggleFavorite);
    assert!(failing.index().is_favorite("sic"));
    assert_eq!(failing.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn refresh_reuses_configuration_and_keeps_selection() {
    let mut app = app();
    app.apply(Action::SelectNext);
    assert_eq!(
        app.apply(Action::Refresh),
        Effect::LoadCatalog(Some(configuration()))
    );

    let mut reordered = catalog();
    reordered.reverse();
    reordered.insert(0, entry("new", "Dan", SICILIAN, 4));
    app.on_event(LoadEvent::Catalog(Ok(reordered)));

    assert_eq!(app.index().len(), 3);
    assert_eq!(app.selected(), Some(1));
    assert_eq!(app.index().entries()[1].hash, "sic");
}

#[test]
fn quit_and_selection_bounds() {
    let mut app = app();
    app.apply(Action::SelectPrevious);
    assert_eq!(app.selected(), Some(0));
    app.apply(Action::SelectNext);
    app.apply(Action::SelectNext);
    assert_eq!(app.selected(), Some(1));
    assert_eq!(app.apply(Action::OpenRow(7)), Effect::None);
    assert_eq!(app.apply(Action::Quit), Effect::Quit);
}

#[tokio::test]
async fn startup_through_mock_service() {
    let service = MockReviewService::new()
        .with_catalog(catalog())
        .with_review_response(|entry| {
            assert_eq!(entry.hash, "ruy");
            Ok(review(&[0.2, 0.1]))
        });

    let mut app = App::new(
        ReviewIndex::new(Box::new(Store::default())).unwrap(),
        Box::new(Clipboard::default()),
    );
    let configuration = review_client::ReviewService::load_configuration(&service)
        .await
        .unwrap();
    app.on_event(LoadEvent::Catalog(
        refresh_catalog(&service, &configuration).await,
    ));

    let Effect::LoadReview(ticket, entry) = app.apply(Action::OpenSelected) else {
        panic!("expected load");
    };
    let result = review_client::ReviewService::fetch_review(&service, &entry).await;
    app.on_event(LoadEvent::Review {
        ticket,
        entry,
        result,
    });

    assert_eq!(app.session().unwrap().hash(), "ruy");
    assert_ne!(app.view().position(), START);
}

#[test]
fn favorites_reload_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let open_app = || {
        let store = reviewer::JsonFavoriteStore::new(dir.path().join("reviewer"));
        let mut app = App::new(
            ReviewIndex::new(Box::new(store)).unwrap(),
            Box::new(Clipboard::default()),
        );
        app.on_event(LoadEvent::Catalog(Ok(catalog())));
        app
    };

    let mut first = open_app();
    first.apply(Action::ToggleFavorite);
    drop(first);

    let second = open_app();
    assert!(second.index().is_favorite("ruy"));
    assert!(!second.index().is_favorite("sic"));
    assert_eq!(review_tui::ui::widgets::catalog::marker(true), "\u{2605}");
}

#[test]
fn failed_refresh_leaves_catalog_untouched() {
    let mut app = app();
    app.apply(Action::SelectNext);
    app.on_event(LoadEvent::Catalog(Err(ClientError::RefreshFailed(
        "exit 1".into(),
    ))));

    assert_eq!(app.index().len(), 2);
    assert_eq!(app.selected(), Some(1));
    let status = app.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("Unable to refresh"));
}
