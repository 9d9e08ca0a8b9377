use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use reviewer::{SideAccuracy, Session};

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}%"))
}

/// Game header: players, tags and per-side accuracy.
pub struct GameHeader<'a> {
    pub session: Option<&'a Session>,
}

pub fn accuracy_line(accuracy: SideAccuracy) -> String {
    format!(
        "Accuracy  White {}  Black {}",
        percent(accuracy.white),
        percent(accuracy.black)
    )
}

impl Widget for GameHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(session) = self.session else {
            Paragraph::new("Select a game and press Enter").render(inner, buf);
            return;
        };

        let game = session.game();
        let tag = |name: &str| game.tags.get(name).map(String::as_str).unwrap_or("?");
        let title = Line::from(vec![
            Span::styled(
                format!("{} vs {}", tag("White"), tag("Black")),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}  {}", tag("Date"), game.result.as_str()),
                Style::default().fg(Color::Gray),
            ),
        ]);
        let accuracy = Line::from(Span::styled(
            accuracy_line(session.accuracy()),
            Style::default().fg(Color::Green),
        ));

        Paragraph::new(vec![title, accuracy]).render(inner, buf);
    }
}
