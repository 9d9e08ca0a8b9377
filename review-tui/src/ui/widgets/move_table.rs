use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use reviewer::move_table::PLACEHOLDER;
use reviewer::{MoveCell, MoveRow};

/// Width of the move number column, e.g. "123. ".
pub const NUMBER_WIDTH: u16 = 5;
/// Width of each half-move column.
pub const CELL_WIDTH: u16 = 12;

/// First visible row so that `current` stays on screen.
pub fn scroll_offset(current: Option<usize>, height: usize) -> usize {
    match current {
        Some(row) if height > 0 && row >= height => row + 1 - height,
        _ => 0,
    }
}

pub struct MoveTablePanel<'a> {
    pub rows: &'a [MoveRow],
    pub highlighted: Option<usize>,
    pub offset: usize,
    pub focused: bool,
}

impl MoveTablePanel<'_> {
    fn cell(&self, cell: Option<&MoveCell>, placeholder: bool) -> Span<'static> {
        let text = match cell {
            Some(cell) => cell.symbol.clone(),
            None if placeholder => PLACEHOLDER.to_string(),
            None => String::new(),
        };
        let width = usize::from(CELL_WIDTH);
        let padded = format!("{text:<width$}");

        let current = cell.is_some_and(|c| Some(c.index) == self.highlighted);
        let style = if current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if cell.is_none() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(padded, style)
    }
}

impl Widget for MoveTablePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Color::Yellow
        } else {
            Color::Cyan
        };
        let block = Block::default()
            .title(" Moves ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.rows.is_empty() {
            Paragraph::new("No moves").render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .rows
            .iter()
            .skip(self.offset)
            .take(usize::from(inner.height))
            .map(|row| {
                let width = usize::from(NUMBER_WIDTH);
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", format!("{}.", row.number)),
                        Style::default().fg(Color::Yellow),
                    ),
                    self.cell(row.white.as_ref(), row.placeholder),
                    self.cell(row.black.as_ref(), false),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_keeps_current_row_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(4), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(12), 5), 8);
        assert_eq!(scroll_offset(Some(3), 0), 0);
    }

    #[test]
    fn placeholder_and_highlight() {
        let rows = vec![MoveRow {
            number: 7,
            white: None,
            black: Some(MoveCell {
                index: 0,
                symbol: "\u{265e}c6".to_string(),
            }),
            placeholder: true,
        }];
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        MoveTablePanel {
            rows: &rows,
            highlighted: Some(0),
            offset: 0,
            focused: false,
        }
        .render(area, &mut buf);

        let text: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(text.contains("7."));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("c6"));
        let black_x = 1 + NUMBER_WIDTH + CELL_WIDTH;
        assert_eq!(buf[(black_x, 1)].bg, Color::Yellow);
    }
}
