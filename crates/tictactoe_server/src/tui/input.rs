//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::new(row.wrapping_sub(1), col),
        KeyCode::Down => Position::new(row + 1, col),
        KeyCode::Left => Position::new(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::new(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}
