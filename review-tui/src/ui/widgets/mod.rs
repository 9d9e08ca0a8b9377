pub mod board;
pub mod catalog;
pub mod eval_meter;
pub mod header;
pub mod move_table;

pub use board::BoardWidget;
pub use catalog::CatalogTable;
pub use eval_meter::EvalMeter;
pub use header::GameHeader;
pub use move_table::MoveTablePanel;
