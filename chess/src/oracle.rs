//! Turns notation text into a move list and answers "what does the board
//! look like after N half-moves".

use crate::fen::{format_fen, fullmove_number, parse_fen, FenError};
use crate::pgn::{parse_pgn, parse_san, strip_annotations, GameResult, PgnError, SanError};
use crate::types::PieceColor;
use cozy_chess::Board;
use std::collections::BTreeMap;

/// A game parsed and validated by an oracle. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGame {
    /// Position before the first half-move.
    pub start_position: String,
    /// Side making the first half-move.
    pub first_mover: PieceColor,
    /// Full-move number of the first half-move.
    pub first_move_number: u32,
    /// Half-moves in SAN, stripped of check and annotation markers.
    pub moves: Vec<String>,
    pub tags: BTreeMap<String, String>,
    pub result: GameResult,
}

impl LoadedGame {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Side that plays half-move `index`.
    pub fn mover_at(&self, index: usize) -> PieceColor {
        PieceColor::mover_at(self.first_mover, index)
    }
}

/// Move-parsing and position-computation capability.
pub trait PositionOracle {
    /// Parse notation text into an ordered, validated move list.
    fn load(&self, notation: &str) -> Result<LoadedGame, OracleError>;

    /// Position after half-move `index` (`None` = before the first move),
    /// replayed from the start position. Costs O(index).
    fn position_at(&self, game: &LoadedGame, index: Option<usize>)
        -> Result<String, OracleError>;

    /// Position reached by playing a single SAN move from `position`.
    fn apply_move(&self, position: &str, san: &str) -> Result<String, OracleError>;
}

/// PGN oracle backed by cozy-chess move generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgnOracle;

impl PgnOracle {
    fn start_board(tags: &BTreeMap<String, String>) -> Result<Board, FenError> {
        match tags.get("FEN") {
            Some(fen) => parse_fen(fen),
            None => Ok(Board::default()),
        }
    }
}

impl PositionOracle for PgnOracle {
    fn load(&self, notation: &str) -> Result<LoadedGame, OracleError> {
        let pgn = parse_pgn(notation)?;
        let start = Self::start_board(&pgn.tags).map_err(PgnError::from)?;
        let start_position = format_fen(&start);

        let mut board = start.clone();
        let mut moves = Vec::with_capacity(pgn.moves.len());
        for (ply, san) in pgn.moves.iter().enumerate() {
            let mv = parse_san(&board, san).map_err(|source| PgnError::IllegalMove {
                ply,
                san: san.clone(),
                source,
            })?;
            board
                .try_play(mv)
                .map_err(|_| SanError::NoLegalMove(san.clone()))?;
            moves.push(strip_annotations(san).to_string());
        }

        Ok(LoadedGame {
            first_mover: start.side_to_move().into(),
            first_move_number: fullmove_number(&start_position),
            start_position,
            moves,
            tags: pgn.tags,
            result: pgn.result,
        })
    }

    fn position_at(
        &self,
        game: &LoadedGame,
        index: Option<usize>,
    ) -> Result<String, OracleError> {
        let mut board = parse_fen(&game.start_position)?;
        let Some(index) = index else {
            return Ok(format_fen(&board));
        };
        if index >= game.moves.len() {
            return Err(OracleError::IndexOutOfRange {
                index,
                len: game.moves.len(),
            });
        }

        for san in &game.moves[..=index] {
            let mv = parse_san(&board, san)?;
            board
                .try_play(mv)
                .map_err(|_| SanError::NoLegalMove(san.clone()))?;
        }
        Ok(format_fen(&board))
    }

    fn apply_move(&self, position: &str, san: &str) -> Result<String, OracleError> {
        let mut board = parse_fen(position)?;
        let mv = parse_san(&board, san)?;
        board
            .try_play(mv)
            .map_err(|_| SanError::NoLegalMove(san.to_string()))?;
        Ok(format_fen(&board))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("PGN error: {0}")]
    Pgn(#[from] PgnError),
    #[error("SAN error: {0}")]
    San(#[from] SanError),
    #[error("FEN error: {0}")]
    Fen(#[from] FenError),
    #[error("Half-move {index} out of range for a game of {len} half-moves")]
    IndexOutOfRange { index: usize, len: usize },
}
