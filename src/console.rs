//! Line-oriented console front end.
//!
//! Prints the board and whose turn it is before every move, reads
//! `row col` lines and reports rejections and results as plain text.

use derive_more::Display;
use gridlock_engine::{
    ChannelObserver, GameController, GameOverEvent, Outcome, Player, RoundOutcome, Score,
    SetupError,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::mpsc::Receiver;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  <row> <col>  place your mark (0-2 each, e.g. `1 2`)
  reset        start a new round once this one is over
  score        show the score
  help         show this help
  quit         leave the game";

/// A line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at `(row, col)`.
    Play {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Start the next round.
    Reset,
    /// Print the score.
    Score,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unrecognized input '{input}'")]
pub struct CommandError {
    /// The offending line, trimmed.
    pub input: String,
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let error = || CommandError {
            input: trimmed.to_string(),
        };

        match trimmed.to_ascii_lowercase().as_str() {
            "reset" | "r" => return Ok(Command::Reset),
            "score" | "s" => return Ok(Command::Score),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let row = parts.next().ok_or_else(error)?;
        let col = parts.next().ok_or_else(error)?;
        if parts.next().is_some() {
            return Err(error());
        }

        Ok(Command::Play {
            row: row.parse().map_err(|_| error())?,
            col: col.parse().map_err(|_| error())?,
        })
    }
}

/// A console game between two players over any reader and writer.
pub struct ConsoleSession<R, W> {
    game: GameController,
    events: Receiver<GameOverEvent>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session reading moves from `input` and printing to `output`.
    ///
    /// # Errors
    ///
    /// Fails when the players share a mark or a name is blank.
    #[instrument(skip(input, output))]
    pub fn new(first: Player, second: Player, input: R, output: W) -> Result<Self, SetupError> {
        let (observer, events) = ChannelObserver::channel();
        let game = GameController::new(first, second, Some(Box::new(observer)))?;
        Ok(Self {
            game,
            events,
            input,
            output,
        })
    }

    /// Plays until `quit` or end of input, then returns the final score.
    #[instrument(skip(self))]
    pub fn run(mut self) -> io::Result<Score> {
        writeln!(self.output, "Type `help` for commands.")?;
        self.print_round()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Play { row, col }) => self.play(row, col)?,
                Ok(Command::Reset) => self.reset()?,
                Ok(Command::Score) => self.print_score()?,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Quit) => break,
                Err(e) => writeln!(self.output, "{}. Type `help` for commands.", e)?,
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.print_score()?;
        info!(score = ?self.game.score(), "Console session finished");
        Ok(self.game.score())
    }

    fn play(&mut self, row: usize, col: usize) -> io::Result<()> {
        let mover = self.game.active_player().name().clone();

        match self.game.play_round(row, col) {
            Ok(RoundOutcome::Continue { .. }) => {
                writeln!(self.output, "{} played ({}, {}).", mover, row, col)?;
                self.print_round()
            }
            Ok(RoundOutcome::Won { .. } | RoundOutcome::Drawn) => {
                writeln!(self.output, "{}", self.game.board())?;
                while let Ok(event) = self.events.try_recv() {
                    self.announce(&event)?;
                }
                writeln!(self.output, "Type `reset` to play again or `quit` to leave.")
            }
            Err(rejection) => writeln!(self.output, "{}", rejection),
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        if !self.game.is_game_over() {
            return writeln!(self.output, "Finish this round before starting a new one.");
        }
        self.game.reset_game();
        writeln!(self.output, "New round!")?;
        self.print_round()
    }

    fn announce(&mut self, event: &GameOverEvent) -> io::Result<()> {
        match (event.outcome(), event.winner_name()) {
            (Outcome::Win, Some(winner)) => writeln!(self.output, "{} wins!", winner)?,
            _ => writeln!(self.output, "It's a draw!")?,
        }
        self.write_score(event.score())
    }

    fn print_round(&mut self) -> io::Result<()> {
        let player = self.game.active_player();
        writeln!(self.output, "{}", self.game.board())?;
        writeln!(self.output, "{}'s turn ({}).", player.name(), player.mark())
    }

    fn print_score(&mut self) -> io::Result<()> {
        self.write_score(self.game.score())
    }

    fn write_score(&mut self, score: Score) -> io::Result<()> {
        let [first, second] = self.game.players();
        writeln!(
            self.output,
            "Score: {} {} - {} draws - {} {}",
            first.name(),
            score.wins_a(),
            score.draws(),
            second.name(),
            score.wins_b()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!("1 2".parse::<Command>(), Ok(Command::Play { row: 1, col: 2 }));
        assert_eq!(" 0,0 ".parse::<Command>(), Ok(Command::Play { row: 0, col: 0 }));
        assert_eq!("2, 1".parse::<Command>(), Ok(Command::Play { row: 2, col: 1 }));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("RESET".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("score".parse::<Command>(), Ok(Command::Score));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("1".parse::<Command>().is_err());
        assert!("1 2 3".parse::<Command>().is_err());
        assert!("-1 0".parse::<Command>().is_err());
        let err = "play".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized input 'play'");
    }
}
