//! What the navigation controller paints into between frames.

use cozy_chess::Board;
use reviewer::{BoardRenderer, EvaluationDisplay, Highlighter};

/// Board, meter and move highlight as last set by the controller.
#[derive(Debug, Default)]
pub struct ReviewView {
    board: Option<Board>,
    position: String,
    evaluation: Option<EvaluationDisplay>,
    highlighted: Option<usize>,
}

impl ReviewView {
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn evaluation(&self) -> Option<&EvaluationDisplay> {
        self.evaluation.as_ref()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }
}

impl Highlighter for ReviewView {
    fn clear(&mut self, index: usize) {
        if self.highlighted == Some(index) {
            self.highlighted = None;
        }
    }

    fn set(&mut self, index: usize) {
        self.highlighted = Some(index);
    }
}

impl BoardRenderer for ReviewView {
    fn show_position(&mut self, position: &str) {
        self.board = match chess::parse_fen(position) {
            Ok(board) => Some(board),
            Err(e) => {
                tracing::warn!(%position, "Cannot draw position: {}", e);
                None
            }
        };
        self.position = position.to_string();
    }

    fn show_evaluation(&mut self, evaluation: Option<&EvaluationDisplay>) {
        self.evaluation = evaluation.cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn clear_only_removes_matching_highlight() {
        let mut view = ReviewView::default();
        view.set(3);
        view.clear(2);
        assert_eq!(view.highlighted(), Some(3));
        view.clear(3);
        assert_eq!(view.highlighted(), None);
    }

    #[test]
    fn position_is_parsed_for_drawing() {
        let mut view = ReviewView::default();
        view.show_position(START);
        assert!(view.board().is_some());
        view.show_position("garbage");
        assert!(view.board().is_none());
        assert_eq!(view.position(), "garbage");
    }

    #[test]
    fn missing_evaluation_resets_meter() {
        let mut view = ReviewView::default();
        view.show_evaluation(Some(&reviewer::scale(1.0)));
        assert!(view.evaluation().is_some());
        view.show_evaluation(None);
        assert!(view.evaluation().is_none());
    }
}
