//! Keyboard and mouse bindings.

use crate::app::{Action, App, Focus, Hitboxes};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use reviewer::MoveRow;

pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match key.code {
        KeyCode::Left => Action::Backward,
        KeyCode::Right => Action::Forward,
        KeyCode::Home => Action::First,
        KeyCode::End => Action::Last,
        KeyCode::Up => match focus {
            Focus::Catalog => Action::SelectPrevious,
            Focus::Moves => Action::PreviousRow,
        },
        KeyCode::Down => match focus {
            Focus::Catalog => Action::SelectNext,
            Focus::Moves => Action::NextRow,
        },
        KeyCode::Enter => Action::OpenSelected,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchFocus,
        KeyCode::Char('f') => Action::ToggleFavorite,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('c') => Action::CopyPosition,
        KeyCode::Char('p') => Action::CopyNotation,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

pub fn map_mouse(mouse: MouseEvent, app: &App) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    hit_test(mouse.column, mouse.row, &app.hitboxes, app.index().len(), &app.move_rows())
}

/// Action for a click at (`column`, `row`) given the last frame's layout.
pub fn hit_test(
    column: u16,
    row: u16,
    hitboxes: &Hitboxes,
    catalog_len: usize,
    moves: &[MoveRow],
) -> Option<Action> {
    let contains = |area: ratatui::layout::Rect| {
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    };

    if contains(hitboxes.catalog) {
        let line = usize::from(row - hitboxes.catalog.y) + hitboxes.catalog_offset;
        return (line < catalog_len).then_some(Action::OpenRow(line));
    }

    if contains(hitboxes.moves) {
        let line = usize::from(row - hitboxes.moves.y) + hitboxes.moves_offset;
        let move_row = moves.get(line)?;
        let within = |(start, end): (u16, u16)| column >= start && column < end;
        let cell = if within(hitboxes.white_column) {
            move_row.white.as_ref()
        } else if within(hitboxes.black_column) {
            move_row.black.as_ref()
        } else {
            None
        };
        return cell.map(|cell| Action::SeekTo(cell.index));
    }

    None
}
