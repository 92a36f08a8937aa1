//! Application state and logic.

use super::grid::cell_at;
use super::input::move_cursor;
use crossterm::event::KeyCode;
use gridlock_engine::{
    ChannelObserver, Coord, GameController, GameOverEvent, Outcome, Player, RoundOutcome,
    SetupError,
};
use ratatui::layout::Rect;
use std::sync::mpsc::Receiver;
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    game: GameController,
    events: Receiver<GameOverEvent>,
    cursor: Coord,
    status: String,
    board_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates the app for a fresh session between two players.
    pub fn new(first: Player, second: Player) -> Result<Self, SetupError> {
        let (observer, events) = ChannelObserver::channel();
        let game = GameController::new(first, second, Some(Box::new(observer)))?;
        let mut app = Self {
            game,
            events,
            cursor: Coord::CENTER,
            status: String::new(),
            board_area: Rect::default(),
            should_quit: false,
        };
        app.prompt_turn();
        Ok(app)
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was last drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Handles a left click at terminal position `(x, y)`.
    ///
    /// Clicks off the board or on a separator are ignored.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, x: u16, y: u16) {
        if let Some(coord) = cell_at(self.board_area, x, y) {
            self.cursor = coord;
            self.play(coord);
        }
    }

    fn play(&mut self, coord: Coord) {
        // Board is inert until reset.
        if self.game.is_game_over() {
            return;
        }
        let mover = self.game.active_player().name().clone();

        match self.game.play_round(coord.row(), coord.col()) {
            Ok(RoundOutcome::Continue { .. }) => {
                debug!(%mover, %coord, "Move applied");
                self.prompt_turn();
            }
            Ok(RoundOutcome::Won { .. } | RoundOutcome::Drawn) => {
                while let Ok(event) = self.events.try_recv() {
                    self.status = game_over_message(&event);
                }
            }
            Err(rejection) => self.status = rejection.to_string(),
        }
    }

    /// Starts the next round once the current one is over.
    pub fn restart(&mut self) {
        if !self.game.is_game_over() {
            self.status = "Finish this round before starting a new one.".to_string();
            return;
        }
        debug!("Restarting game");
        self.game.reset_game();
        self.cursor = Coord::CENTER;
        self.prompt_turn();
    }

    fn prompt_turn(&mut self) {
        let player = self.game.active_player();
        self.status = format!("{}'s turn ({})", player.name(), player.mark());
    }
}

fn game_over_message(event: &GameOverEvent) -> String {
    match (event.outcome(), event.winner_name()) {
        (Outcome::Win, Some(winner)) => {
            format!("{} wins! Press 'r' to play again or 'q' to quit.", winner)
        }
        _ => "It's a draw! Press 'r' to play again or 'q' to quit.".to_string(),
    }
}
