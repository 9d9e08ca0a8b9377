pub mod fen;
pub mod oracle;
pub mod pgn;
pub mod types;

pub use fen::{format_fen, fullmove_number, parse_fen, FenError};
pub use oracle::{LoadedGame, OracleError, PgnOracle, PositionOracle};
pub use pgn::{parse_pgn, parse_san, GameResult, PgnError, PgnGame, SanError};
pub use types::{PieceColor, PieceKind};
