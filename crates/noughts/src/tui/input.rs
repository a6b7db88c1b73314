//! Translating terminal input into shell actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use noughts_core::Position;

use super::ui::BoardHitMap;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the human's mark on a cell.
    Place(Position),
    /// Place the human's mark under the cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(KeyCode),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a terminal event to an action.
///
/// Mouse clicks resolve to a cell through the rectangles recorded by the
/// last draw.
pub fn action_for(event: &Event, hit_map: &BoardHitMap) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => hit_map
            .position_at(mouse.column, mouse.row)
            .map(Action::Place),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Place),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
