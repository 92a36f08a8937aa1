//! Gridlock - two-player tic-tac-toe for the terminal
//!
//! The rules live in [`gridlock_engine`]; this crate adds the front ends
//! and the ambient plumbing around them.
//!
//! # Architecture
//!
//! - **Config**: TOML file with player names, marks and logging
//! - **Console**: line-oriented game over any reader and writer
//! - **TUI**: full-screen ratatui board with mouse and keyboard input
//! - **Logging**: tracing subscriber writing to stderr or a file
//!
//! # Example
//!
//! ```
//! use gridlock::{ConsoleSession, GameConfig};
//! use std::io::Cursor;
//!
//! let config = GameConfig::default();
//! let input = Cursor::new("0 0\n1 0\n0 1\n1 1\n0 2\nquit\n");
//! let mut output = Vec::new();
//! let session = ConsoleSession::new(
//!     config.players().first().to_player(),
//!     config.players().second().to_player(),
//!     input,
//!     &mut output,
//! )
//! .unwrap();
//!
//! let score = session.run().unwrap();
//! assert_eq!(score.wins_a(), 1);
//! assert!(String::from_utf8(output).unwrap().contains("Player One wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod logging;
mod tui;

// Crate-level exports - Configuration
pub use config::{
    ConfigError, DEFAULT_CONFIG_PATH, GameConfig, LoggingConfig, PlayerConfig, PlayersConfig,
};

// Crate-level exports - Console front end
pub use console::{Command, CommandError, ConsoleSession};

// Crate-level exports - Logging
pub use logging::{DEFAULT_LOG_FILE, LogTarget, init_tracing};

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Game engine
pub use gridlock_engine::{
    Board, Cell, Coord, GameController, GameObserver, GameOverEvent, Mark, MoveRejection,
    Outcome, Phase, Player, RoundOutcome, Score, Seat, SetupError, create_game,
};
