use chess::{PieceColor, PieceKind};
use cozy_chess::{Board, File, Rank, Square};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Symbol for an empty square.
const EMPTY_SQUARE: &str = "\u{00b7}";

/// Inner width and height needed for eight ranks plus the file labels.
pub const BOARD_INNER: (u16, u16) = (18, 9);

/// Compact board using Unicode piece glyphs, White at the bottom.
pub struct BoardWidget<'a> {
    pub board: Option<&'a Board>,
}

fn square_symbol(board: &Board, square: Square) -> &'static str {
    match (board.piece_on(square), board.color_on(square)) {
        (Some(piece), Some(color)) => {
            PieceKind::from(piece).glyph(PieceColor::from(color))
        }
        _ => EMPTY_SQUARE,
    }
}

/// Text lines for `board`, rank 8 first, with a trailing file label line.
pub fn board_lines(board: &Board) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray).bg(Color::White);
    let piece = Style::default().fg(Color::Black).bg(Color::White);

    let mut lines: Vec<Line> = (0..8)
        .rev()
        .map(|r| {
            let rank = Rank::index(r);
            let mut spans = vec![Span::styled(format!("{} ", r + 1), label)];
            spans.extend((0..8).map(|f| {
                let square = Square::new(File::index(f), rank);
                Span::styled(format!("{} ", square_symbol(board, square)), piece)
            }));
            Line::from(spans)
        })
        .collect();

    let mut files = vec![Span::styled("  ", label)];
    files.extend(('a'..='h').map(|c| Span::styled(format!("{c} "), label)));
    lines.push(Line::from(files));
    lines
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::White).fg(Color::Black));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < BOARD_INNER.0 || inner.height < BOARD_INNER.1 {
            return;
        }

        let Some(board) = self.board else {
            Paragraph::new("No game loaded").render(inner, buf);
            return;
        };

        Paragraph::new(board_lines(board))
            .style(Style::default().bg(Color::White))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn start_position_lines() {
        let lines = board_lines(&Board::default());
        assert_eq!(lines.len(), 9);
        assert_eq!(line_text(&lines[0]), "8 \u{265c} \u{265e} \u{265d} \u{265b} \u{265a} \u{265d} \u{265e} \u{265c} ");
        assert_eq!(line_text(&lines[6]), "2 \u{2659} \u{2659} \u{2659} \u{2659} \u{2659} \u{2659} \u{2659} \u{2659} ");
        assert!(line_text(&lines[4]).starts_with("4 \u{00b7} "));
        assert_eq!(line_text(&lines[8]), "  a b c d e f g h ");
    }

    #[test]
    fn too_small_area_draws_only_frame() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        BoardWidget {
            board: Some(&Board::default()),
        }
        .render(area, &mut buf);
        assert!(!buf.content().iter().any(|cell| cell.symbol() == "\u{265a}"));
    }
}
