//! Canonical piece and color types for the project.
//! cozy-chess types are internal implementation details.

/// Project-owned piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Project-owned color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceKind {
    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Piece named by a leading SAN letter. Pawns carry no letter in SAN, so
    /// only the five officer letters are recognised and matching is case-sensitive
    /// (`b` is a file, `B` a bishop).
    pub fn from_san_letter(c: char) -> Option<Self> {
        match c {
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'R' => Some(Self::Rook),
            'B' => Some(Self::Bishop),
            'N' => Some(Self::Knight),
            _ => None,
        }
    }

    /// Unicode chess glyph for this piece in the given color.
    pub fn glyph(self, color: PieceColor) -> &'static str {
        match (self, color) {
            (Self::King, PieceColor::White) => "\u{2654}",   // ♔
            (Self::Queen, PieceColor::White) => "\u{2655}",  // ♕
            (Self::Rook, PieceColor::White) => "\u{2656}",   // ♖
            (Self::Bishop, PieceColor::White) => "\u{2657}", // ♗
            (Self::Knight, PieceColor::White) => "\u{2658}", // ♘
            (Self::Pawn, PieceColor::White) => "\u{2659}",   // ♙
            (Self::King, PieceColor::Black) => "\u{265a}",   // ♚
            (Self::Queen, PieceColor::Black) => "\u{265b}",  // ♛
            (Self::Rook, PieceColor::Black) => "\u{265c}",   // ♜
            (Self::Bishop, PieceColor::Black) => "\u{265d}", // ♝
            (Self::Knight, PieceColor::Black) => "\u{265e}", // ♞
            (Self::Pawn, PieceColor::Black) => "\u{265f}",   // ♟
        }
    }
}

impl PieceColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Color of the side that plays half-move `index` of a game whose first
    /// move is made by `first`.
    pub fn mover_at(first: Self, index: usize) -> Self {
        if index % 2 == 0 {
            first
        } else {
            first.opposite()
        }
    }
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(p: cozy_chess::Piece) -> Self {
        match p {
            cozy_chess::Piece::Pawn => Self::Pawn,
            cozy_chess::Piece::Knight => Self::Knight,
            cozy_chess::Piece::Bishop => Self::Bishop,
            cozy_chess::Piece::Rook => Self::Rook,
            cozy_chess::Piece::Queen => Self::Queen,
            cozy_chess::Piece::King => Self::King,
        }
    }
}

impl From<PieceKind> for cozy_chess::Piece {
    fn from(p: PieceKind) -> Self {
        match p {
            PieceKind::Pawn => Self::Pawn,
            PieceKind::Knight => Self::Knight,
            PieceKind::Bishop => Self::Bishop,
            PieceKind::Rook => Self::Rook,
            PieceKind::Queen => Self::Queen,
            PieceKind::King => Self::King,
        }
    }
}

impl From<cozy_chess::Color> for PieceColor {
    fn from(c: cozy_chess::Color) -> Self {
        match c {
            cozy_chess::Color::White => Self::White,
            cozy_chess::Color::Black => Self::Black,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn san_letters_are_case_sensitive() {
        assert_eq!(PieceKind::from_san_letter('B'), Some(PieceKind::Bishop));
        assert_eq!(PieceKind::from_san_letter('b'), None);
        assert_eq!(PieceKind::from_san_letter('P'), None);
        assert_eq!(PieceKind::from_san_letter('e'), None);
    }

    #[test]
    fn glyphs_differ_by_color() {
        assert_eq!(PieceKind::Knight.glyph(PieceColor::White), "\u{2658}");
        assert_eq!(PieceKind::Knight.glyph(PieceColor::Black), "\u{265e}");
        assert_eq!(PieceKind::King.glyph(PieceColor::White), "\u{2654}");
        assert_eq!(PieceKind::King.glyph(PieceColor::Black), "\u{265a}");
    }

    #[test]
    fn mover_alternates_from_first_side() {
        assert_eq!(PieceColor::mover_at(PieceColor::White, 0), PieceColor::White);
        assert_eq!(PieceColor::mover_at(PieceColor::White, 1), PieceColor::Black);
        assert_eq!(PieceColor::mover_at(PieceColor::Black, 0), PieceColor::Black);
        assert_eq!(PieceColor::mover_at(PieceColor::Black, 3), PieceColor::White);
    }
}
