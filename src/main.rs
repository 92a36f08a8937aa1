//! Gridlock - Unified CLI
//!
//! Two-player tic-tac-toe with a console and a full-screen front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gridlock::{ConsoleSession, GameConfig, LogTarget, Score, init_tracing, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_names(cli.player_one, cli.player_two);
    config.validate()?;

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => run_console(&config),
        Command::Tui => run_fullscreen(&config),
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Run the line-oriented game on stdin and stdout
#[instrument(skip_all)]
fn run_console(config: &GameConfig) -> Result<()> {
    init_tracing(config.logging(), &LogTarget::for_console(config.logging()))?;
    info!("Starting console game");

    let players = config.players();
    let stdin = std::io::stdin();
    let session = ConsoleSession::new(
        players.first().to_player(),
        players.second().to_player(),
        stdin.lock(),
        std::io::stdout(),
    )?;

    let score = session.run().context("Console session failed")?;
    log_final(score);
    Ok(())
}

/// Run the full-screen game
#[instrument(skip_all)]
fn run_fullscreen(config: &GameConfig) -> Result<()> {
    init_tracing(config.logging(), &LogTarget::for_tui(config.logging()))?;
    info!("Starting terminal UI game");

    let players = config.players();
    let score = run_tui(players.first().to_player(), players.second().to_player())?;
    log_final(score);
    Ok(())
}

fn log_final(score: Score) {
    info!(
        wins_a = score.wins_a(),
        wins_b = score.wins_b(),
        draws = score.draws(),
        "Session finished"
    );
}
