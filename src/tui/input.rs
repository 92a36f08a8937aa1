//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use gridlock_engine::Coord;

/// Moves the cursor one cell for an arrow key, stopping at the edges.
///
/// Any other key leaves the cursor where it is.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let step = match key {
        KeyCode::Up => cursor.offset(-1, 0),
        KeyCode::Down => cursor.offset(1, 0),
        KeyCode::Left => cursor.offset(0, -1),
        KeyCode::Right => cursor.offset(0, 1),
        _ => None,
    };
    step.unwrap_or(cursor)
}
