use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};
use reviewer::ReviewIndex;

pub const HEADERS: [&str; 6] = ["", "White", "Black", "Date", "Result", "Moves"];

pub const WIDTHS: [Constraint; 6] = [
    Constraint::Length(2),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Length(10),
    Constraint::Length(7),
    Constraint::Length(5),
];

/// Favorite marker shown in the first column.
pub fn marker(favorite: bool) -> &'static str {
    if favorite {
        "\u{2605}"
    } else {
        "\u{25b6}"
    }
}

/// Cell texts for every catalog entry, in catalog order.
pub fn catalog_rows(index: &ReviewIndex) -> Vec<[String; 6]> {
    index
        .entries()
        .iter()
        .map(|entry| {
            [
                marker(index.is_favorite(&entry.hash)).to_string(),
                entry.white.clone(),
                entry.black.clone(),
                entry.date.clone(),
                entry.actual_result.clone(),
                entry.move_count().to_string(),
            ]
        })
        .collect()
}

pub struct CatalogTable<'a> {
    pub index: &'a ReviewIndex,
    pub selected: Option<usize>,
    pub offset: usize,
    pub focused: bool,
}

impl CatalogTable<'_> {
    /// Body area (below border and header) for a table drawn into `area`.
    pub fn body(area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        }
    }
}

impl Widget for CatalogTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Color::Yellow
        } else {
            Color::Cyan
        };
        let block = Block::default()
            .title(format!(" Reviews ({}) ", self.index.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let header_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(
            HEADERS
                .iter()
                .map(|h| Cell::from(Text::from(*h)).style(header_style)),
        )
        .height(1);

        let visible = usize::from(Self::body(area).height);
        let rows: Vec<Row> = catalog_rows(self.index)
            .into_iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .map(|(row, cells)| {
                let style = if Some(row) == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(cells.map(Cell::from)).style(style).height(1)
            })
            .collect();

        Table::new(rows, WIDTHS)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}
