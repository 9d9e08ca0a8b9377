use std::sync::Arc;

/// Position of the viewer within a fixed move list.
///
/// `index() == None` means "before the first move". A cursor over a non-empty
/// list starts on the first half-move and never steps back before it; only an
/// empty list leaves the cursor at `None`.
#[derive(Debug, Clone)]
pub struct MoveCursor {
    moves: Arc<[String]>,
    index: Option<usize>,
}

impl MoveCursor {
    pub fn new(moves: Arc<[String]>) -> Self {
        let index = if moves.is_empty() { None } else { Some(0) };
        Self { moves, index }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn current_move(&self) -> Option<&str> {
        self.index.map(|i| self.moves[i].as_str())
    }

    pub fn is_at_end(&self) -> bool {
        match self.index {
            Some(i) => i + 1 >= self.moves.len(),
            None => self.moves.is_empty(),
        }
    }

    /// Step to the next half-move and return it. `None` at the end of the list,
    /// in which case nothing changes.
    pub fn forward(&mut self) -> Option<&str> {
        let next = self.index.map_or(0, |i| i + 1);
        if next >= self.moves.len() {
            return None;
        }
        self.index = Some(next);
        Some(self.moves[next].as_str())
    }

    /// Step back one half-move. Returns false on the first half-move.
    pub fn backward(&mut self) -> bool {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to `target`. Returns false when out of range or already there.
    pub fn seek(&mut self, target: usize) -> bool {
        if target >= self.moves.len() || self.index == Some(target) {
            return false;
        }
        self.index = Some(target);
        true
    }
}
