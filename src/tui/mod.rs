//! Full-screen terminal front end.
//!
//! Play with the mouse or with the arrow keys and Enter. Logging must go to
//! a file while this runs; see [`crate::LogTarget::for_tui`].

mod app;
mod grid;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridlock_engine::{Player, Score};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    terminal: Term,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let restored = disable_raw_mode()
            .and_then(|()| {
                execute!(
                    self.terminal.backend_mut(),
                    LeaveAlternateScreen,
                    DisableMouseCapture
                )
            })
            .and_then(|()| self.terminal.show_cursor());
        if let Err(e) = restored {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Runs the terminal UI until the player quits and returns the final score.
///
/// # Errors
///
/// Fails when the players cannot be seated or the terminal cannot be driven.
#[instrument(skip_all)]
pub fn run_tui(first: Player, second: Player) -> Result<Score> {
    let mut app = App::new(first, second)?;
    info!("Starting terminal UI");

    let mut guard = TerminalGuard::enter()?;
    run_app(&mut guard.terminal, &mut app)?;
    drop(guard);

    let score = app.game().score();
    info!(?score, "Terminal UI finished");
    Ok(score)
}

fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut board_area = Rect::default();
        terminal.draw(|frame| board_area = ui::draw(frame, app))?;
        app.set_board_area(board_area);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
    Ok(())
}
