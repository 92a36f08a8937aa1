//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log file used by the terminal UI when none is configured.
pub const DEFAULT_LOG_FILE: &str = "gridlock.log";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// File, truncated at startup.
    File(PathBuf),
}

impl LogTarget {
    /// Target for line-oriented front ends: the configured file, else stderr.
    pub fn for_console(config: &LoggingConfig) -> Self {
        config
            .file()
            .clone()
            .map_or(LogTarget::Stderr, LogTarget::File)
    }

    /// Target for full-screen front ends, which must not write to the
    /// terminal: the configured file, else [`DEFAULT_LOG_FILE`].
    pub fn for_tui(config: &LoggingConfig) -> Self {
        LogTarget::File(
            config
                .file()
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        )
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(config: &LoggingConfig, target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter()));

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?,
        LogTarget::File(path) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(create_log_file(path)?))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?,
    }

    info!(?target, "Tracing initialized");
    Ok(())
}

fn create_log_file(path: &Path) -> Result<std::fs::File> {
    std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))
}
