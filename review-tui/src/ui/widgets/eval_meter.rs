use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use reviewer::{EvaluationDisplay, MeterSide};

/// Two-segment vertical meter: Black's share on top, White's below.
/// Without an evaluation the meter sits at an even split with no label.
pub struct EvalMeter<'a> {
    pub evaluation: Option<&'a EvaluationDisplay>,
}

/// Number of rows (out of `height`) given to the top segment.
pub fn top_rows(height: u16, height_percent: f64) -> u16 {
    let rows = (f64::from(height) * height_percent / 100.0).round();
    (rows.max(0.0) as u16).min(height)
}

impl Widget for EvalMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let percent = self.evaluation.map_or(50.0, |e| e.height_percent);
        let split = top_rows(inner.height, percent);

        for dy in 0..inner.height {
            let bg = if dy < split {
                Color::Black
            } else {
                Color::White
            };
            for dx in 0..inner.width {
                buf[(inner.x + dx, inner.y + dy)].set_symbol(" ").set_bg(bg);
            }
        }

        let Some(evaluation) = self.evaluation else {
            return;
        };
        let (y, fg, bg) = match evaluation.favor {
            MeterSide::Top => (inner.y, Color::White, Color::Black),
            MeterSide::Bottom => (inner.y + inner.height - 1, Color::Black, Color::White),
        };
        buf.set_stringn(
            inner.x,
            y,
            &evaluation.display_value,
            usize::from(inner.width),
            Style::default()
                .fg(fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        );
    }
}
