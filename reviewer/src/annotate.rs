use crate::types::{ClassificationKind, PerMoveReview};
use chess::{PieceColor, PieceKind};

/// Render a half-move for the move list: piece glyph for officer moves,
/// followed by the rest of the SAN and the quality marker from the review.
///
/// Pawn moves (no leading piece letter) are kept verbatim. A missing review
/// or an unrecognised classification yields no marker.
pub fn annotate(san: &str, mover: PieceColor, review: Option<&PerMoveReview>) -> String {
    let mut chars = san.chars();
    let mut symbol = match chars.next().and_then(PieceKind::from_san_letter) {
        Some(piece) => {
            let mut s = String::from(piece.glyph(mover));
            s.push_str(chars.as_str());
            s
        }
        None => san.to_string(),
    };

    if let Some(review) = review {
        symbol.push_str(quality_suffix(&review.classification.kind));
    }
    symbol
}

/// Marker appended for a classification.
pub fn quality_suffix(kind: &ClassificationKind) -> &'static str {
    match kind {
        ClassificationKind::Brilliant => "!!",
        ClassificationKind::Great => "!",
        ClassificationKind::Inaccuracy | ClassificationKind::Mistake => "?",
        ClassificationKind::Blunder => "??",
        ClassificationKind::None | ClassificationKind::Other(_) => "",
    }
}
