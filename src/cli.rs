//! Command-line interface for gridlock.

use clap::{Parser, Subcommand};
use gridlock::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

/// Gridlock - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply when it is missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Name of the first player, overriding the config
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player, overriding the config
    #[arg(long)]
    pub player_two: Option<String>,

    /// Front end to run (console when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal by typing `row col`
    Console,

    /// Play on a full-screen board with mouse or arrow keys
    Tui,

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_console() {
        let cli = Cli::try_parse_from(["gridlock"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_name_overrides_and_subcommand() {
        let cli = Cli::try_parse_from([
            "gridlock",
            "--player-one",
            "Ada",
            "--player-two",
            "Grace",
            "tui",
        ])
        .unwrap();
        assert_eq!(cli.player_one.as_deref(), Some("Ada"));
        assert_eq!(cli.player_two.as_deref(), Some("Grace"));
        assert_eq!(cli.command, Some(Command::Tui));
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["gridlock", "server"]).is_err());
    }
}
