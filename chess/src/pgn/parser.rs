use std::collections::BTreeMap;

/// A parsed PGN game. Moves are raw SAN tokens; they are resolved against a
/// board by the position oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct PgnGame {
    pub tags: BTreeMap<String, String>,
    pub moves: Vec<String>,
    pub result: GameResult,
}

impl PgnGame {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Ongoing,
}

impl GameResult {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "1-0" => Some(Self::WhiteWins),
            "0-1" => Some(Self::BlackWins),
            "1/2-1/2" => Some(Self::Draw),
            "*" => Some(Self::Ongoing),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WhiteWins => "1-0",
            Self::BlackWins => "0-1",
            Self::Draw => "1/2-1/2",
            Self::Ongoing => "*",
        }
    }
}

/// Parse a PGN string into a game.
///
/// Comments, variations and NAGs are skipped. Parsing stops at the first
/// result token, so only the first game of a multi-game file is read.
pub fn parse_pgn(input: &str) -> Result<PgnGame, PgnError> {
    let mut tags = BTreeMap::new();
    let mut moves = Vec::new();
    let mut result = GameResult::Ongoing;

    let mut chars = input.chars().peekable();
    let mut token = String::new();

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                flush_token(&mut token, &mut moves, &mut result);
                let mut raw = String::new();
                let mut in_quotes = false;
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' if in_quotes => {
                            if let Some(escaped) = chars.next() {
                                raw.push(escaped);
                            }
                        }
                        '"' => {
                            in_quotes = !in_quotes;
                            raw.push(c);
                        }
                        ']' if !in_quotes => {
                            closed = true;
                            break;
                        }
                        _ => raw.push(c),
                    }
                }
                if !closed {
                    return Err(PgnError::InvalidTag(raw));
                }
                let (name, value) = parse_tag(&raw)?;
                tags.insert(name, value);
            }
            '{' => {
                flush_token(&mut token, &mut moves, &mut result);
                if !chars.by_ref().any(|c| c == '}') {
                    return Err(PgnError::UnterminatedComment);
                }
            }
            ';' => {
                flush_token(&mut token, &mut moves, &mut result);
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '(' => {
                flush_token(&mut token, &mut moves, &mut result);
                let mut depth = 1usize;
                while depth > 0 {
                    match chars.next() {
                        Some('(') => depth += 1,
                        Some(')') => depth -= 1,
                        Some('{') => {
                            if !chars.by_ref().any(|c| c == '}') {
                                return Err(PgnError::UnterminatedComment);
                            }
                        }
                        Some(_) => {}
                        None => return Err(PgnError::UnterminatedVariation),
                    }
                }
            }
            ')' => return Err(PgnError::InvalidFormat),
            '$' => {
                flush_token(&mut token, &mut moves, &mut result);
                while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                    chars.next();
                }
            }
            c if c.is_whitespace() => {
                if flush_token(&mut token, &mut moves, &mut result) {
                    break;
                }
            }
            c => token.push(c),
        }
    }
    flush_token(&mut token, &mut moves, &mut result);

    Ok(PgnGame {
        tags,
        moves,
        result,
    })
}

/// Push the pending token as a move (dropping any move-number prefix).
/// Returns true when the token was a game result.
fn flush_token(token: &mut String, moves: &mut Vec<String>, result: &mut GameResult) -> bool {
    if token.is_empty() {
        return false;
    }
    let raw = std::mem::take(token);

    if let Some(r) = GameResult::from_token(&raw) {
        *result = r;
        return true;
    }

    let san = match raw.rfind('.') {
        Some(pos) if raw[..pos].chars().all(|c| c.is_ascii_digit() || c == '.') => &raw[pos + 1..],
        _ => raw.as_str(),
    };
    if !san.is_empty() {
        moves.push(san.to_string());
    }
    false
}

fn parse_tag(raw: &str) -> Result<(String, String), PgnError> {
    let raw = raw.trim();
    let (name, rest) = raw
        .split_once(char::is_whitespace)
        .ok_or_else(|| PgnError::InvalidTag(raw.to_string()))?;
    let value = rest
        .trim()
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| PgnError::InvalidTag(raw.to_string()))?;
    Ok((name.to_string(), value.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum PgnError {
    #[error("Invalid PGN format")]
    InvalidFormat,
    #[error("Invalid tag: {0}")]
    InvalidTag(String),
    #[error("Unterminated comment")]
    UnterminatedComment,
    #[error("Unterminated variation")]
    UnterminatedVariation,
    #[error("Move {ply} ({san}): {source}")]
    IllegalMove {
        ply: usize,
        san: String,
        #[source]
        source: super::san::SanError,
    },
    #[error("Invalid starting position: {0}")]
    InvalidStart(#[from] crate::fen::FenError),
}
