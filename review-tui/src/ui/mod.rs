mod render_loop;
pub mod widgets;

pub use render_loop::run_app;

use crate::app::{App, Hitboxes, StatusKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use widgets::board::BOARD_INNER;
use widgets::move_table::{scroll_offset, CELL_WIDTH, NUMBER_WIDTH};
use widgets::{BoardWidget, CatalogTable, EvalMeter, GameHeader, MoveTablePanel};

const KEY_HINTS: &str =
    "\u{2190}/\u{2192} move  Home/End  Enter load  f favorite  r refresh  c/p copy  Tab focus  q quit";

/// Draw one frame and record the regions mouse clicks map to.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [body, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let [catalog_area, review_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    let [header_area, board_row, moves_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(BOARD_INNER.1 + 2),
        Constraint::Min(3),
    ])
    .areas(review_area);
    let [board_area, meter_area, _] = Layout::horizontal([
        Constraint::Length(BOARD_INNER.0 + 2),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .areas(board_row);

    let focus = app.focus();

    let catalog_body = CatalogTable::body(catalog_area);
    let catalog_offset = scroll_offset(app.selected(), usize::from(catalog_body.height));
    frame.render_widget(
        CatalogTable {
            index: app.index(),
            selected: app.selected(),
            offset: catalog_offset,
            focused: focus == crate::app::Focus::Catalog,
        },
        catalog_area,
    );

    frame.render_widget(
        GameHeader {
            session: app.session(),
        },
        header_area,
    );
    frame.render_widget(
        BoardWidget {
            board: app.view().board(),
        },
        board_area,
    );
    frame.render_widget(
        EvalMeter {
            evaluation: app.view().evaluation(),
        },
        meter_area,
    );

    let rows = app.move_rows();
    let moves_body = Block::default().borders(Borders::ALL).inner(moves_area);
    let current_row = app.session().zip(app.view().highlighted()).map(|(session, index)| {
        reviewer::move_table::row_of(session.game(), index)
    });
    let moves_offset = scroll_offset(current_row, usize::from(moves_body.height));
    frame.render_widget(
        MoveTablePanel {
            rows: &rows,
            highlighted: app.view().highlighted(),
            offset: moves_offset,
            focused: focus == crate::app::Focus::Moves,
        },
        moves_area,
    );

    draw_status(frame, app, status_area);

    let white_start = moves_body.x + NUMBER_WIDTH;
    app.hitboxes = Hitboxes {
        catalog: catalog_body,
        catalog_offset,
        moves: moves_body,
        moves_offset,
        white_column: (white_start, white_start + CELL_WIDTH),
        black_column: (white_start + CELL_WIDTH, white_start + 2 * CELL_WIDTH),
    };
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status() {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Info => Style::default().fg(Color::Gray),
                StatusKind::Error => Style::default().fg(Color::White).bg(Color::Red),
            };
            Paragraph::new(status.text.as_str()).style(style)
        }
        None => Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(line, area);
}
