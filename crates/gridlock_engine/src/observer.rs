//! Notification of finished rounds.
//!
//! The controller holds at most one [`GameObserver`] and calls it
//! synchronously, exactly once, when a round ends in a win or a draw.
//! Ordinary and rejected moves are never reported.

use crate::board::Coord;
use crate::score::Score;
use std::sync::mpsc;
use tracing::warn;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// A player completed a line.
    Win,
    /// The board filled without a line.
    Draw,
}

/// Payload delivered when a round ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverEvent {
    outcome: Outcome,
    winner_name: Option<String>,
    score: Score,
    winning_cells: Option<Vec<Coord>>,
}

impl GameOverEvent {
    pub(crate) fn win(winner_name: String, score: Score, winning_cells: Vec<Coord>) -> Self {
        Self {
            outcome: Outcome::Win,
            winner_name: Some(winner_name),
            score,
            winning_cells: Some(winning_cells),
        }
    }

    pub(crate) fn draw(score: Score) -> Self {
        Self {
            outcome: Outcome::Draw,
            winner_name: None,
            score,
            winning_cells: None,
        }
    }

    /// Win or draw.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Name of the winner; `None` for a draw.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner_name.as_deref()
    }

    /// Score after this round was counted.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Cells of the completed line; `None` for a draw.
    pub fn winning_cells(&self) -> Option<&[Coord]> {
        self.winning_cells.as_deref()
    }
}

/// Receives finished-round notifications.
pub trait GameObserver {
    /// Called once per round that ends in a win or a draw.
    fn on_game_over(&mut self, event: &GameOverEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameOverEvent),
{
    fn on_game_over(&mut self, event: &GameOverEvent) {
        self(event)
    }
}

/// Observer that forwards events over a channel.
///
/// Lets a front end that also owns the controller pick events up after each
/// call instead of sharing state with a closure.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: mpsc::Sender<GameOverEvent>,
}

impl ChannelObserver {
    /// Creates the observer and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::Receiver<GameOverEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl GameObserver for ChannelObserver {
    fn on_game_over(&mut self, event: &GameOverEvent) {
        if self.sender.send(event.clone()).is_err() {
            warn!("Game-over receiver dropped, event discarded");
        }
    }
}
