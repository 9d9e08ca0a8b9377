use chess::{LoadedGame, PieceColor};

/// One half-move cell of the move table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCell {
    pub index: usize,
    pub symbol: String,
}

/// One full move: number, White's half-move, Black's half-move.
///
/// `white` is `None` with `placeholder` set on the first row of a game that
/// starts with Black to move; `black` is `None` after a final White move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub number: u32,
    pub white: Option<MoveCell>,
    pub black: Option<MoveCell>,
    pub placeholder: bool,
}

/// Placeholder text for the empty White cell.
pub const PLACEHOLDER: &str = "...";

/// Lay annotated half-moves out in rows of full moves.
pub fn move_table(game: &LoadedGame, symbols: &[String]) -> Vec<MoveRow> {
    let offset = usize::from(game.first_mover == PieceColor::Black);
    let total = symbols.len() + offset;
    let cell = |slot: usize| -> Option<MoveCell> {
        let index = slot.checked_sub(offset)?;
        symbols.get(index).map(|symbol| MoveCell {
            index,
            symbol: symbol.clone(),
        })
    };

    (0..total)
        .step_by(2)
        .enumerate()
        .map(|(row, slot)| MoveRow {
            number: game.first_move_number + row as u32,
            white: cell(slot),
            black: cell(slot + 1),
            placeholder: slot < offset,
        })
        .collect()
}

/// Row holding half-move `index`.
pub fn row_of(game: &LoadedGame, index: usize) -> usize {
    (index + usize::from(game.first_mover == PieceColor::Black)) / 2
}
