use cozy_chess::Board;

/// Parse a FEN string into a Board
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    if fen.split_whitespace().next().is_none() {
        return Err(FenError::InvalidFormat);
    }

    fen.trim().parse().map_err(|_| FenError::InvalidFormat)
}

/// Format a Board as a FEN string
pub fn format_fen(board: &Board) -> String {
    board.to_string()
}

/// Full-move number recorded in the sixth FEN field. Defaults to 1 when the
/// field is missing or unreadable, which is how most PGN exporters treat it.
pub fn fullmove_number(fen: &str) -> u32 {
    fen.split_whitespace()
        .nth(5)
        .and_then(|field| field.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

#[derive(Debug, thiserror::Error)]
pub enum FenError {
    #[error("Invalid FEN format")]
    InvalidFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

    #[test]
    fn parse_and_format_roundtrip() {
        let board = parse_fen(AFTER_E4).unwrap();
        assert_eq!(format_fen(&board), AFTER_E4);
    }

    #[test]
    fn empty_fen_is_rejected() {
        assert!(matches!(parse_fen("   "), Err(FenError::InvalidFormat)));
    }

    #[test]
    fn garbage_fen_is_rejected() {
        assert!(parse_fen("not a position").is_err());
    }

    #[test]
    fn fullmove_number_reads_sixth_field() {
        assert_eq!(fullmove_number(AFTER_E4), 1);
        assert_eq!(
            fullmove_number("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 17"),
            17
        );
        assert_eq!(fullmove_number("8/8/8/8/8/8/8/8 w - -"), 1);
    }
}
