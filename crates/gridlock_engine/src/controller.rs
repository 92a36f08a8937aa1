//! Turn and session control.
//!
//! [`GameController`] owns the board, both players and the score. A round
//! moves from [`Phase::AwaitingMove`] to [`Phase::Won`] or [`Phase::Drawn`];
//! [`GameController::reset_game`] starts the next round and keeps the score.

use crate::board::{Board, Coord};
use crate::cell::Mark;
use crate::error::{MoveRejection, SetupError};
use crate::observer::{GameObserver, GameOverEvent};
use crate::player::{Player, Seat};
use crate::score::Score;
use crate::win::{WinResult, WinningLine, check_win};
use tracing::{debug, info, instrument, warn};

/// Default name of the first player.
pub const DEFAULT_FIRST_NAME: &str = "Player One";

/// Default name of the second player.
pub const DEFAULT_SECOND_NAME: &str = "Player Two";

/// Where the current round stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the active player to move.
    AwaitingMove,
    /// A player completed a line.
    Won {
        /// Seat of the winner.
        seat: Seat,
        /// The completed line.
        line: WinningLine,
    },
    /// The board filled with no line.
    Drawn,
}

/// What an accepted move led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The round goes on with `next` to move.
    Continue {
        /// Seat that moves next.
        next: Seat,
    },
    /// The mover completed a line.
    Won {
        /// Seat of the winner.
        seat: Seat,
        /// The completed line.
        line: WinningLine,
    },
    /// The move filled the board without a line.
    Drawn,
}

/// A mark placed during the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Move {
    seat: Seat,
    coord: Coord,
}

impl Move {
    /// Seat that played the move.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Where the mark went.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

/// Runs rounds between two players and keeps score.
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: Seat,
    phase: Phase,
    score: Score,
    history: Vec<Move>,
    observer: Option<Box<dyn GameObserver>>,
}

/// Creates a controller with the default marks `X` and `O`.
///
/// `on_game_over` is called once for every round that ends in a win or a
/// draw.
#[instrument(skip(on_game_over))]
pub fn create_game(
    name_a: &str,
    name_b: &str,
    on_game_over: impl GameObserver + 'static,
) -> GameController {
    GameController::from_parts(
        [Player::new(name_a, Mark::X), Player::new(name_b, Mark::O)],
        Some(Box::new(on_game_over)),
    )
}

impl GameController {
    /// Creates a controller for two players.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateMark`] if both players share a mark
    /// and [`SetupError::EmptyName`] if a name is blank.
    #[instrument(skip(observer))]
    pub fn new(
        first: Player,
        second: Player,
        observer: Option<Box<dyn GameObserver>>,
    ) -> Result<Self, SetupError> {
        for (seat, player) in [(Seat::First, &first), (Seat::Second, &second)] {
            if player.name().trim().is_empty() {
                return Err(SetupError::EmptyName { seat });
            }
        }
        if first.mark() == second.mark() {
            return Err(SetupError::DuplicateMark {
                symbol: first.mark().symbol(),
            });
        }
        Ok(Self::from_parts([first, second], observer))
    }

    fn from_parts(players: [Player; 2], observer: Option<Box<dyn GameObserver>>) -> Self {
        info!(
            first = %players[0].name(),
            second = %players[1].name(),
            "Starting game session"
        );
        Self {
            board: Board::new(),
            players,
            active: Seat::First,
            phase: Phase::AwaitingMove,
            score: Score::default(),
            history: Vec::new(),
            observer,
        }
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// On a win or a draw the observer is notified before this returns.
    ///
    /// # Errors
    ///
    /// Rejections leave every part of the state untouched:
    /// - [`MoveRejection::GameAlreadyOver`] after a win or draw, until reset
    /// - [`MoveRejection::OutOfBounds`] for coordinates off the board
    /// - [`MoveRejection::CellOccupied`] when the cell already has a mark
    #[instrument(skip(self), fields(active = ?self.active))]
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<RoundOutcome, MoveRejection> {
        if self.is_game_over() {
            warn!("Game is already over, reset to play again");
            return Err(MoveRejection::GameAlreadyOver);
        }

        let Some(coord) = Coord::new(row, col) else {
            warn!(row, col, "Move is off the board");
            return Err(MoveRejection::OutOfBounds { row, col });
        };

        if !self.board.get(coord).is_empty() {
            warn!(%coord, "That spot is already taken");
            return Err(MoveRejection::CellOccupied { coord });
        }

        let seat = self.active;
        let mark = *self.player(seat).mark();
        debug!(player = %self.player(seat).name(), %coord, %mark, "Placing mark");
        self.board.place(coord, mark);
        self.history.push(Move::new(seat, coord));

        if let WinResult::Win(line) = check_win(&self.board, coord, mark) {
            self.score.record_win(seat);
            self.phase = Phase::Won {
                seat,
                line: line.clone(),
            };
            info!(winner = %self.player(seat).name(), score = ?self.score, "Round won");
            let event = GameOverEvent::win(
                self.player(seat).name().clone(),
                self.score,
                line.cells().to_vec(),
            );
            self.notify(&event);
            return Ok(RoundOutcome::Won { seat, line });
        }

        if self.board.is_full() {
            self.score.record_draw();
            self.phase = Phase::Drawn;
            info!(score = ?self.score, "Round drawn");
            self.notify(&GameOverEvent::draw(self.score));
            return Ok(RoundOutcome::Drawn);
        }

        self.active = seat.other();
        debug!(next = %self.active_player().name(), "Turn passes");
        Ok(RoundOutcome::Continue { next: self.active })
    }

    /// Clears the board and hands the first move back to the first player.
    ///
    /// The score is kept and the observer is not called.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.active = Seat::First;
        self.phase = Phase::AwaitingMove;
        self.history.clear();
        info!(score = ?self.score, "Round reset");
    }

    fn notify(&mut self, event: &GameOverEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_game_over(event);
        }
    }

    /// Player whose move is expected.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Seat whose move is expected.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Read-only board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true once the round is won or drawn, until reset.
    pub fn is_game_over(&self) -> bool {
        self.phase != Phase::AwaitingMove
    }

    /// Score accumulated over every round of this controller.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Current round phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Moves of the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("active", &self.active)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("history", &self.history)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::from_parts(
            [
                Player::new(DEFAULT_FIRST_NAME, Mark::X),
                Player::new(DEFAULT_SECOND_NAME, Mark::O),
            ],
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_shared_marks() {
        let result = GameController::new(
            Player::new("Ada", Mark::X),
            Player::new("Grace", Mark::X),
            None,
        );
        assert_eq!(result.err(), Some(SetupError::DuplicateMark { symbol: 'X' }));
    }

    #[test]
    fn test_new_rejects_blank_names() {
        let result = GameController::new(
            Player::new("Ada", Mark::X),
            Player::new("  ", Mark::O),
            None,
        );
        assert_eq!(
            result.err(),
            Some(SetupError::EmptyName { seat: Seat::Second })
        );
    }

    #[test]
    fn test_first_move_passes_the_turn() {
        let mut game = GameController::default();
        assert_eq!(game.active_seat(), Seat::First);
        let outcome = game.play_round(1, 1).expect("legal move");
        assert_eq!(outcome, RoundOutcome::Continue { next: Seat::Second });
        assert_eq!(game.active_player().name(), DEFAULT_SECOND_NAME);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].seat(), Seat::First);
    }

    #[test]
    fn test_out_of_bounds_changes_nothing() {
        let mut game = GameController::default();
        assert_eq!(
            game.play_round(3, 1),
            Err(MoveRejection::OutOfBounds { row: 3, col: 1 })
        );
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.active_seat(), Seat::First);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_reset_clears_history() {
        let mut game = GameController::default();
        game.play_round(0, 0).expect("legal move");
        game.reset_game();
        assert!(game.history().is_empty());
        assert_eq!(game.phase(), &Phase::AwaitingMove);
    }
}
