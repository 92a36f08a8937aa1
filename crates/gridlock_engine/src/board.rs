//! The fixed 3x3 grid and its coordinates.

use crate::cell::{Cell, Mark};
use tracing::{debug, instrument};

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// A checked position on the board.
///
/// Both `row` and `col` are always below [`SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// The middle cell.
    pub const CENTER: Coord = Coord {
        row: SIZE / 2,
        col: SIZE / 2,
    };

    /// Creates a coordinate, or `None` when it lies off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Zero-based row, top to bottom.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column, left to right.
    pub fn col(self) -> usize {
        self.col
    }

    /// Steps by `(d_row, d_col)`, or `None` when that leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 game board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `coord`.
    ///
    /// The caller checks that the cell is empty; the controller does so
    /// before every placement.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, mark: Mark) {
        debug_assert!(self.get(coord).is_empty(), "cell {coord} already marked");
        self.cells[coord.row][coord.col] = Cell::Marked(mark);
    }

    /// Returns the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Read-only view of the whole grid.
    pub fn snapshot(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Replaces every cell with a fresh empty one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
        debug!("Board cleared");
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Textual grid: one line per row, cells separated by a space,
    /// `-` for empty cells.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
    }

    #[test]
    fn test_coord_offset_stays_on_board() {
        assert_eq!(at(1, 1).offset(-1, 1), Some(at(0, 2)));
        assert_eq!(at(0, 0).offset(-1, 0), None);
        assert_eq!(at(2, 2).offset(0, 1), None);
        assert_eq!(at(0, 2).offset(1, -1), Some(at(1, 1)));
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Coord::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], at(0, 0));
        assert_eq!(all[1], at(0, 1));
        assert_eq!(all[3], at(1, 0));
        assert_eq!(all[8], at(2, 2));
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(at(1, 2), Mark::X);
        assert_eq!(board.get(at(1, 2)), Cell::Marked(Mark::X));
        assert_eq!(board.snapshot()[1][2], Cell::Marked(Mark::X));
        assert!(board.get(at(2, 1)).is_empty());
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::new();
        for coord in Coord::all() {
            board.place(coord, Mark::O);
        }
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_render_uses_dash_for_empty() {
        let mut board = Board::new();
        board.place(at(0, 0), Mark::X);
        board.place(at(1, 1), Mark::O);
        assert_eq!(board.render(), "X - -\n- O -\n- - -");
    }
}
