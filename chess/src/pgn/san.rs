use cozy_chess::{Board, File, Move, Piece, Rank, Square};

/// Parse Standard Algebraic Notation (SAN) move against the legal moves of `board`.
///
/// Check and mate markers and annotation suffixes (`!`, `?`) are ignored.
/// Castling accepts both `O-O` and `0-0` spellings.
pub fn parse_san(board: &Board, san: &str) -> Result<Move, SanError> {
    let text = strip_suffixes(san);
    if text.is_empty() {
        return Err(SanError::InvalidFormat(san.to_string()));
    }

    match text {
        "O-O" | "0-0" => return find_castle(board, CastleSide::King, san),
        "O-O-O" | "0-0-0" => return find_castle(board, CastleSide::Queen, san),
        _ => {}
    }

    let pattern = SanPattern::parse(text)?;
    let side = board.side_to_move();

    let mut matches = Vec::new();
    board.generate_moves(|moves| {
        if moves.piece != pattern.piece {
            return false;
        }
        for mv in moves {
            // Castling is encoded as king-takes-own-rook; never a plain king move.
            if board.color_on(mv.to) == Some(side) {
                continue;
            }
            if pattern.matches(mv) {
                matches.push(mv);
            }
        }
        false
    });

    match matches.as_slice() {
        [mv] => Ok(*mv),
        [] => Err(SanError::NoLegalMove(san.to_string())),
        _ => Err(SanError::AmbiguousMove(san.to_string())),
    }
}

/// Remove trailing check, mate and annotation markers from a SAN token.
pub fn strip_suffixes(san: &str) -> &str {
    san.trim()
        .trim_end_matches(|c| matches!(c, '+' | '#' | '!' | '?'))
}

/// Remove trailing `!`/`?` annotation glyphs, keeping check and mate markers.
pub fn strip_annotations(san: &str) -> &str {
    san.trim().trim_end_matches(|c| matches!(c, '!' | '?'))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CastleSide {
    King,
    Queen,
}

fn find_castle(board: &Board, castle: CastleSide, san: &str) -> Result<Move, SanError> {
    let side = board.side_to_move();
    let mut found = None;
    board.generate_moves(|moves| {
        if moves.piece != Piece::King {
            return false;
        }
        for mv in moves {
            if board.color_on(mv.to) != Some(side) {
                continue;
            }
            let kingside = mv.to.file() as usize > mv.from.file() as usize;
            if kingside == (castle == CastleSide::King) {
                found = Some(mv);
                return true;
            }
        }
        false
    });
    found.ok_or_else(|| SanError::NoLegalMove(san.to_string()))
}

/// Decomposed non-castling SAN token.
struct SanPattern {
    piece: Piece,
    from_file: Option<File>,
    from_rank: Option<Rank>,
    to: Square,
    promotion: Option<Piece>,
}

impl SanPattern {
    fn parse(text: &str) -> Result<Self, SanError> {
        let mut chars: Vec<char> = text.chars().collect();

        let piece = match chars.first().copied() {
            Some('K') => Piece::King,
            Some('Q') => Piece::Queen,
            Some('R') => Piece::Rook,
            Some('B') => Piece::Bishop,
            Some('N') => Piece::Knight,
            _ => Piece::Pawn,
        };
        if piece != Piece::Pawn {
            chars.remove(0);
        }

        let mut promotion = None;
        if piece == Piece::Pawn {
            if let Some(&last) = chars.last() {
                if let Some(promo) = promotion_piece(last) {
                    promotion = Some(promo);
                    chars.pop();
                    if chars.last() == Some(&'=') {
                        chars.pop();
                    }
                } else if last == '=' {
                    return Err(SanError::InvalidPromotion(text.to_string()));
                }
            }
        }

        chars.retain(|c| *c != 'x' && *c != ':' && *c != '-');
        if chars.len() < 2 {
            return Err(SanError::InvalidFormat(text.to_string()));
        }

        let dest = chars.split_off(chars.len() - 2);
        let to = Square::new(parse_file(dest[0])?, parse_rank(dest[1])?);

        let mut from_file = None;
        let mut from_rank = None;
        for c in chars {
            match c {
                'a'..='h' => from_file = Some(parse_file(c)?),
                '1'..='8' => from_rank = Some(parse_rank(c)?),
                _ => return Err(SanError::InvalidFormat(text.to_string())),
            }
        }

        Ok(Self {
            piece,
            from_file,
            from_rank,
            to,
            promotion,
        })
    }

    fn matches(&self, mv: Move) -> bool {
        mv.to == self.to
            && mv.promotion == self.promotion
            && self.from_file.map_or(true, |f| mv.from.file() == f)
            && self.from_rank.map_or(true, |r| mv.from.rank() == r)
    }
}

fn promotion_piece(c: char) -> Option<Piece> {
    match c {
        'Q' => Some(Piece::Queen),
        'R' => Some(Piece::Rook),
        'B' => Some(Piece::Bishop),
        'N' => Some(Piece::Knight),
        _ => None,
    }
}

fn parse_file(c: char) -> Result<File, SanError> {
    match c {
        'a'..='h' => Ok(File::index(c as usize - 'a' as usize)),
        _ => Err(SanError::InvalidFile(c)),
    }
}

fn parse_rank(c: char) -> Result<Rank, SanError> {
    match c {
        '1'..='8' => Ok(Rank::index(c as usize - '1' as usize)),
        _ => Err(SanError::InvalidRank(c)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SanError {
    #[error("No legal move found for: {0}")]
    NoLegalMove(String),
    #[error("Ambiguous move: {0}")]
    AmbiguousMove(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid file: {0}")]
    InvalidFile(char),
    #[error("Invalid rank: {0}")]
    InvalidRank(char),
    #[error("Invalid promotion: {0}")]
    InvalidPromotion(String),
}
