//! Marks and the cells that hold them.

use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol rendered for an empty cell. Never a valid [`Mark`].
pub const EMPTY_SYMBOL: char = '-';

/// The token a player places in a cell.
///
/// Any printable, non-whitespace character except [`EMPTY_SYMBOL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Mark(char);

impl Mark {
    /// The first player's default mark.
    pub const X: Mark = Mark('X');

    /// The second player's default mark.
    pub const O: Mark = Mark('O');

    /// Creates a mark from a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidMark`] for whitespace, control characters
    /// and the empty-cell symbol.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, SetupError> {
        if symbol == EMPTY_SYMBOL || symbol.is_whitespace() || symbol.is_control() {
            return Err(SetupError::InvalidMark { symbol });
        }
        Ok(Self(symbol))
    }

    /// Returns the symbol of this mark.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Mark {
    type Error = SetupError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Mark::new(symbol)
    }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> Self {
        mark.0
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Symbol used by textual renderings.
    pub fn symbol(self) -> char {
        self.mark().map_or(EMPTY_SYMBOL, Mark::symbol)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
