//! Per-side accuracy derived from the evaluation curve, using the win
//! probability model popularised by lichess.

use crate::types::ReviewDocument;
use chess::PieceColor;

/// Win probability for the first player given an evaluation in pawns.
pub fn win_probability(evaluation: f64) -> f64 {
    let p = 0.5 + 0.5 * (2.0 / (1.0 + (-0.368208 * evaluation).exp()) - 1.0);
    p.clamp(0.0, 1.0)
}

/// Accuracy of a single move given how much win probability it gave away.
pub fn move_accuracy(win_drop: f64) -> f64 {
    (1.031668 * (-4.354 * win_drop).exp() - 0.031668).clamp(0.0, 1.0)
}

/// Average move accuracy per side, in percent. `None` for a side without
/// reviewed moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SideAccuracy {
    pub white: Option<f64>,
    pub black: Option<f64>,
}

/// Compute accuracies from the reviewed prefix. Evaluations are from White's
/// point of view; the position before the first reviewed move counts as level.
pub fn side_accuracy(review: &ReviewDocument, first_mover: PieceColor) -> SideAccuracy {
    let mut totals = [(0.0f64, 0usize); 2];
    let mut before = 0.0;

    for (index, reviewed) in review.moves.iter().enumerate() {
        let after = reviewed.evaluation;
        let mover = PieceColor::mover_at(first_mover, index);
        let (win_before, win_after) = match mover {
            PieceColor::White => (win_probability(before), win_probability(after)),
            PieceColor::Black => (1.0 - win_probability(before), 1.0 - win_probability(after)),
        };
        let drop = (win_before - win_after).max(0.0);

        let slot = &mut totals[mover as usize];
        slot.0 += move_accuracy(drop);
        slot.1 += 1;
        before = after;
    }

    let average = |(sum, count): (f64, usize)| (count > 0).then(|| 100.0 * sum / count as f64);
    SideAccuracy {
        white: average(totals[PieceColor::White as usize]),
        black: average(totals[PieceColor::Black as usize]),
    }
}
