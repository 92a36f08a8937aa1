//! Error types for game setup and move handling.

use crate::board::Coord;
use crate::player::Seat;

/// Why a move was not applied.
///
/// Rejections are informational: the game state is left untouched and the
/// caller may simply tell the user and wait for the next move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The round already ended; reset before playing again.
    #[display("Game is already over. Reset to play again.")]
    GameAlreadyOver,

    /// The target cell already holds a mark.
    #[display("Cell {coord} is already taken")]
    CellOccupied {
        /// The occupied cell.
        coord: Coord,
    },

    /// The coordinates lie outside the 3x3 board.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveRejection {}

/// Invalid player configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// The symbol cannot be used as a mark.
    #[display("'{}' cannot be used as a mark", symbol.escape_default())]
    InvalidMark {
        /// The rejected symbol.
        symbol: char,
    },

    /// Both players were given the same mark.
    #[display("Both players use the mark '{symbol}'")]
    DuplicateMark {
        /// The shared symbol.
        symbol: char,
    },

    /// A player name is empty or blank.
    #[display("{seat} player needs a name")]
    EmptyName {
        /// Seat with the missing name.
        seat: Seat,
    },
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let coord = Coord::new(1, 2).unwrap();
        assert_eq!(
            MoveRejection::CellOccupied { coord }.to_string(),
            "Cell (1, 2) is already taken"
        );
        assert_eq!(
            MoveRejection::OutOfBounds { row: 3, col: 0 }.to_string(),
            "Position (3, 0) is off the board"
        );
        assert_eq!(
            MoveRejection::GameAlreadyOver.to_string(),
            "Game is already over. Reset to play again."
        );
    }

    #[test]
    fn test_setup_error_display() {
        assert_eq!(
            SetupError::DuplicateMark { symbol: 'X' }.to_string(),
            "Both players use the mark 'X'"
        );
        assert_eq!(
            SetupError::InvalidMark { symbol: '\n' }.to_string(),
            "'\\n' cannot be used as a mark"
        );
        assert_eq!(
            SetupError::EmptyName { seat: Seat::Second }.to_string(),
            "Second player needs a name"
        );
    }
}
