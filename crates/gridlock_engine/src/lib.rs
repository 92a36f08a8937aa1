//! Pure rules for two-player 3x3 tic-tac-toe.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Cell`]s addressed by checked [`Coord`]s
//! - **Win detection**: [`check_win`] scans only the lines through the
//!   last-played cell
//! - **Controller**: [`GameController`] enforces turn order, rejects illegal
//!   moves, keeps a [`Score`] across rounds and reports finished rounds to a
//!   [`GameObserver`]
//!
//! Rendering and input live outside this crate; front ends drive the
//! controller through its public methods only.
//!
//! # Example
//!
//! ```
//! use gridlock_engine::{GameOverEvent, Outcome, RoundOutcome, create_game};
//!
//! let mut game = create_game("Ada", "Grace", |event: &GameOverEvent| {
//!     assert_eq!(event.outcome(), Outcome::Win);
//! });
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.play_round(row, col).unwrap();
//! }
//! let outcome = game.play_round(0, 2).unwrap();
//! assert!(matches!(outcome, RoundOutcome::Won { .. }));
//! assert_eq!(game.score().wins_a(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod controller;
mod error;
mod observer;
mod player;
mod score;
mod win;

pub use board::{Board, Coord, SIZE};
pub use cell::{Cell, EMPTY_SYMBOL, Mark};
pub use controller::{
    DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, GameController, Move, Phase, RoundOutcome,
    create_game,
};
pub use error::{MoveRejection, SetupError};
pub use observer::{ChannelObserver, GameObserver, GameOverEvent, Outcome};
pub use player::{Player, Seat};
pub use score::Score;
pub use win::{Axis, LINE_LENGTH, WinResult, WinningLine, check_win};
