//! TOML configuration for players and logging.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridlock_engine::{DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, Mark, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "gridlock.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The two players.
    players: PlayersConfig,
    /// Log filtering and destination.
    logging: LoggingConfig,
}

/// Both seats.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Moves first each round.
    first: PlayerConfig,
    /// Moves second.
    second: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            first: PlayerConfig {
                name: DEFAULT_FIRST_NAME.to_string(),
                mark: Mark::X,
            },
            second: PlayerConfig {
                name: DEFAULT_SECOND_NAME.to_string(),
                mark: Mark::O,
            },
        }
    }
}

/// One player's name and mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Single-character mark.
    mark: Mark,
}

impl PlayerConfig {
    /// Builds the engine player.
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.mark)
    }
}

/// Where logs go and how much is kept.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directives, used when `RUST_LOG` is unset.
    filter: String,
    /// Log file. The terminal UI always logs to a file and falls back to
    /// `gridlock.log`; the console logs to stderr when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, or the defaults when the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Replaces player names given on the command line.
    pub fn with_names(mut self, first: Option<String>, second: Option<String>) -> Self {
        if let Some(name) = first {
            self.players.first.name = name;
        }
        if let Some(name) = second {
            self.players.second.name = name;
        }
        self
    }

    /// Checks names, marks and the log filter.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PlayersConfig { first, second } = &self.players;

        if first.name.trim().is_empty() {
            return Err(ConfigError::new("players.first.name must not be empty"));
        }
        if second.name.trim().is_empty() {
            return Err(ConfigError::new("players.second.name must not be empty"));
        }
        if first.mark == second.mark {
            return Err(ConfigError::new(format!(
                "players.first.mark and players.second.mark are both '{}'",
                first.mark
            )));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::new(format!(
                "logging.filter '{}' is invalid: {}",
                self.logging.filter, e
            )));
        }

        Ok(())
    }

    /// Renders this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players.second]
name = "Grace"
mark = "Y"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players().second().name(), "Grace");
        assert_eq!(config.players().second().mark().symbol(), 'Y');
        assert_eq!(config.players().first().name(), DEFAULT_FIRST_NAME);
        assert_eq!(config.logging().filter(), "warn");
    }

    #[test]
    fn test_rejects_reserved_mark() {
        let toml_str = r#"
[players.first]
name = "Ada"
mark = "-"
"#;
        assert!(toml::from_str::<GameConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_shared_marks() {
        let mut config = GameConfig::default();
        config.players.second.mark = Mark::X;
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("both 'X'"));
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let config = GameConfig::default().with_names(None, Some("   ".to_string()));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_filter() {
        let mut config = GameConfig::default();
        config.logging.filter = "gridlock=loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_names_overrides() {
        let config = GameConfig::default().with_names(Some("Ada".to_string()), None);
        assert_eq!(config.players().first().name(), "Ada");
        assert_eq!(config.players().second().name(), DEFAULT_SECOND_NAME);
    }

    #[test]
    fn test_toml_roundtrips() {
        let config = GameConfig::default().with_names(Some("Ada".to_string()), None);
        let toml_str = config.to_toml().unwrap();
        let parsed: GameConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
