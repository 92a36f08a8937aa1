//! Board geometry shared by drawing and mouse hit-testing.

use gridlock_engine::{Coord, SIZE};
use ratatui::layout::Rect;

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 9;

/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const CELLS: u16 = SIZE as u16;

/// Width of the whole board including separators.
pub const BOARD_WIDTH: u16 = CELLS * CELL_WIDTH + (CELLS - 1);

/// Height of the whole board including separators.
pub const BOARD_HEIGHT: u16 = CELLS * CELL_HEIGHT + (CELLS - 1);

/// Area of the cell at `coord` inside a board drawn at `board`.
pub fn cell_rect(board: Rect, coord: Coord) -> Rect {
    Rect::new(
        board.x + coord.col() as u16 * (CELL_WIDTH + 1),
        board.y + coord.row() as u16 * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

/// Cell under the terminal position `(x, y)`, if any.
///
/// Separators and anything outside the board map to `None`.
pub fn cell_at(board: Rect, x: u16, y: u16) -> Option<Coord> {
    let dx = x.checked_sub(board.x)?;
    let dy = y.checked_sub(board.y)?;
    if dx % (CELL_WIDTH + 1) == CELL_WIDTH || dy % (CELL_HEIGHT + 1) == CELL_HEIGHT {
        return None;
    }
    Coord::new(
        usize::from(dy / (CELL_HEIGHT + 1)),
        usize::from(dx / (CELL_WIDTH + 1)),
    )
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_board_dimensions() {
        assert_eq!(BOARD_WIDTH, 29);
        assert_eq!(BOARD_HEIGHT, 11);
    }

    #[test]
    fn test_every_cell_rect_maps_back() {
        let board = Rect::new(5, 2, BOARD_WIDTH, BOARD_HEIGHT);
        for coord in Coord::all() {
            let rect = cell_rect(board, coord);
            assert_eq!(cell_at(board, rect.x, rect.y), Some(coord));
            let right = rect.x + rect.width - 1;
            let bottom = rect.y + rect.height - 1;
            assert_eq!(cell_at(board, right, bottom), Some(coord));
        }
    }

    #[test]
    fn test_separators_and_outside_miss() {
        let board = Rect::new(5, 2, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(cell_at(board, 5 + CELL_WIDTH, 3), None);
        assert_eq!(cell_at(board, 6, 2 + CELL_HEIGHT), None);
        assert_eq!(cell_at(board, 4, 3), None);
        assert_eq!(cell_at(board, 6, 1), None);
        assert_eq!(cell_at(board, 5 + BOARD_WIDTH, 3), None);
    }

    #[test]
    fn test_click_in_center_cell() {
        let board = Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(cell_at(board, 14, 5), Some(at(1, 1)));
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(0, 0, 20, 8);
        let rect = centered(area, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(rect, Rect::new(0, 0, 20, 8));
        let rect = centered(Rect::new(0, 0, 40, 20), 10, 4);
        assert_eq!(rect, Rect::new(15, 8, 10, 4));
    }
}
