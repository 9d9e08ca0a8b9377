use crate::accuracy::{side_accuracy, SideAccuracy};
use crate::annotate::annotate;
use crate::cursor::MoveCursor;
use crate::evaluation::{scale, EvaluationDisplay};
use crate::move_table::{move_table, MoveRow};
use crate::types::{CatalogEntry, PerMoveReview, ReviewDocument};
use chess::{LoadedGame, OracleError, PositionOracle};
use std::sync::Arc;

/// Everything that belongs to the game currently on screen. Built in one go
/// and replaced as a whole when another game is loaded.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) hash: String,
    pub(crate) notation: String,
    pub(crate) game: LoadedGame,
    pub(crate) review: ReviewDocument,
    pub(crate) cursor: MoveCursor,
    pub(crate) position: String,
}

impl Session {
    /// Parse the entry's notation and position the cursor on the first
    /// half-move (or the start position for a game without moves).
    pub fn open<O: PositionOracle + ?Sized>(
        oracle: &O,
        entry: &CatalogEntry,
        review: ReviewDocument,
    ) -> Result<Self, OracleError> {
        let game = oracle.load(&entry.pgn)?;
        let cursor = MoveCursor::new(Arc::from(game.moves.clone()));
        let position = oracle.position_at(&game, cursor.index())?;

        Ok(Self {
            hash: entry.hash.clone(),
            notation: entry.pgn.clone(),
            game,
            review,
            cursor,
            position,
        })
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn game(&self) -> &LoadedGame {
        &self.game
    }

    pub fn review(&self) -> &ReviewDocument {
        &self.review
    }

    pub fn cursor(&self) -> &MoveCursor {
        &self.cursor
    }

    pub fn index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Review of the half-move under the cursor, if it was analysed.
    pub fn current_review(&self) -> Option<&PerMoveReview> {
        self.review.get(self.cursor.index()?)
    }

    pub fn evaluation(&self) -> Option<EvaluationDisplay> {
        self.current_review().map(|r| scale(r.evaluation))
    }

    /// Display symbol of every half-move.
    pub fn annotated_moves(&self) -> Vec<String> {
        self.game
            .moves
            .iter()
            .enumerate()
            .map(|(i, san)| annotate(san, self.game.mover_at(i), self.review.get(i)))
            .collect()
    }

    pub fn move_table(&self) -> Vec<MoveRow> {
        move_table(&self.game, &self.annotated_moves())
    }

    pub fn accuracy(&self) -> SideAccuracy {
        side_accuracy(&self.review, self.game.first_mover)
    }
}
