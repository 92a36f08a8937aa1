//! Players and their seats.

use crate::cell::Mark;
use derive_getters::Getters;

/// Which of the two players, by turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Seat {
    /// Moves first in every round.
    First,
    /// Moves second.
    Second,
}

impl Seat {
    /// Index of this seat into the controller's player pair.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// A named participant and the mark they place.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Mark this player places for the whole session.
    mark: Mark,
}
