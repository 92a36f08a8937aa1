//! Win detection through the last-played cell.
//!
//! Marks are only ever added to the board, so a move can only complete lines
//! that pass through it. Instead of re-scanning every row, column and
//! diagonal, [`check_win`] walks outward from the played cell along each of
//! the four axes and counts contiguous matching marks.

use crate::board::{Board, Coord};
use crate::cell::Mark;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// Marks needed in a row to win.
pub const LINE_LENGTH: usize = 3;

/// Furthest a scan walks from the played cell in one direction.
const MAX_STEPS: usize = LINE_LENGTH - 1;

/// Direction of a line through a cell, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Axis {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Positive `(row, col)` step along this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (1, 0),
            Axis::Horizontal => (0, 1),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// A completed line of one mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    axis: Axis,
    cells: Vec<Coord>,
}

impl WinningLine {
    /// Axis the line runs along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cells of the line, from the negative end of the axis to the positive
    /// end. Includes the just-played cell.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Returns true if `coord` is part of the line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Result of checking a move for a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinResult {
    /// The move completed no line.
    NoWin,
    /// The move completed this line.
    Win(WinningLine),
}

impl WinResult {
    /// Returns true for [`WinResult::Win`].
    pub fn is_win(&self) -> bool {
        matches!(self, WinResult::Win(_))
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<&WinningLine> {
        match self {
            WinResult::NoWin => None,
            WinResult::Win(line) => Some(line),
        }
    }
}

/// Checks whether placing `mark` at `coord` completed a line.
///
/// Axes are tried in [`Axis`] order and the first complete one is returned.
#[instrument(skip(board))]
pub fn check_win(board: &Board, coord: Coord, mark: Mark) -> WinResult {
    for axis in Axis::iter() {
        if let Some(line) = scan_axis(board, coord, mark, axis) {
            debug!(%axis, cells = ?line.cells, "Line completed");
            return WinResult::Win(line);
        }
    }
    WinResult::NoWin
}

fn scan_axis(board: &Board, coord: Coord, mark: Mark, axis: Axis) -> Option<WinningLine> {
    let (d_row, d_col) = axis.delta();
    let behind = contiguous(board, coord, mark, -d_row, -d_col);
    let ahead = contiguous(board, coord, mark, d_row, d_col);
    let count = 1 + behind.len() + ahead.len();
    trace!(%axis, count, "Scanned axis");

    if count < LINE_LENGTH {
        return None;
    }

    let mut cells: Vec<Coord> = behind.into_iter().rev().collect();
    cells.push(coord);
    cells.extend(ahead);
    Some(WinningLine { axis, cells })
}

/// Cells holding `mark` stepping away from `from`, nearest first. Stops at
/// the board edge or the first mismatch.
fn contiguous(board: &Board, from: Coord, mark: Mark, d_row: isize, d_col: isize) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(MAX_STEPS);
    let mut current = from;
    for _ in 0..MAX_STEPS {
        match current.offset(d_row, d_col) {
            Some(next) if board.get(next).mark() == Some(mark) => {
                cells.push(next);
                current = next;
            }
            _ => break,
        }
    }
    cells
}
