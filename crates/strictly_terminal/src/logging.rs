//! Tracing subscriber setup.

use std::fs::{File, OpenOptions};
use std::sync::Arc;

use anyhow::{Context, Result};
use strictly_session::LogConfig;
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file so they stay out of the terminal UI.
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this
/// twice is harmless; the second subscriber is not installed.
///
/// Logging never gates the game: if the log file cannot be opened a warning
/// goes to stderr, no subscriber is installed, and `false` is returned.
pub fn init_tracing(log: &LogConfig) -> bool {
    let log_file = match open_log_file(log) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: {:#}; continuing without logs", e);
            return false;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    true
}

fn open_log_file(log: &LogConfig) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log.file())
        .with_context(|| format!("Failed to open log file {}", log.file().display()))
}
