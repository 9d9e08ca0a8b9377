mod parser;
mod san;

pub use parser::{parse_pgn, GameResult, PgnError, PgnGame};
pub use san::{parse_san, strip_annotations, strip_suffixes, SanError};
