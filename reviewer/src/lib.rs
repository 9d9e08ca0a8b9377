//! Review navigation core
//!
//! Steps through an analysed game one half-move at a time: tracks the current
//! half-move, derives the board position for it, and renders every half-move
//! as an annotated symbol driven by the per-move review record.

pub mod accuracy;
pub mod annotate;
pub mod cursor;
pub mod evaluation;
pub mod index;
pub mod move_table;
pub mod navigation;
pub mod persistence;
pub mod session;
pub mod types;

pub use accuracy::{side_accuracy, SideAccuracy};
pub use annotate::annotate;
pub use cursor::MoveCursor;
pub use evaluation::{scale, EvaluationDisplay, MeterSide};
pub use index::{FavoriteStore, ReviewIndex};
pub use move_table::{move_table, MoveCell, MoveRow};
pub use navigation::{
    BoardRenderer, BoardView, Highlighter, LoadTicket, NavOutcome, NavigationController,
    NavigationError,
};
pub use persistence::{JsonFavoriteStore, PersistenceError};
pub use session::Session;
pub use types::{
    CatalogEntry, Classification, ClassificationKind, Configuration, PerMoveReview,
    ReviewDocument, ReviewPaths,
};

pub use chess::{LoadedGame, OracleError, PgnOracle, PieceColor, PositionOracle};
