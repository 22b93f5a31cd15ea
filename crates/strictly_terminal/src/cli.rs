//! Command-line interface for the tic-tac-toe binary.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use strictly_session::{AppConfig, ConfigError, StoreBackend};
use tracing::instrument;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "TICTACTOE_DATA_DIR";

/// Tic-tac-toe for two players on one keyboard, with a saved scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a persisted scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Score storage backend (file, memory, none)
    #[arg(long)]
    pub backend: Option<StoreBackend>,

    /// Directory for saved scores (file backend)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep scores in memory only for this run
    #[arg(long, conflicts_with = "backend")]
    pub ephemeral: bool,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the saved scores
    Scores,

    /// Reset the saved scores to zero
    ResetScores,

    /// Delete the saved score record
    ForgetScores,
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Play)
    }

    /// Builds the effective configuration.
    ///
    /// Starts from `--config`, else `tictactoe.toml` in `cwd` if present,
    /// else defaults; then applies command-line overrides. The data
    /// directory comes from `--data-dir`, then `env_data_dir`, then the
    /// file.
    #[instrument(skip(self))]
    pub fn resolve_config(
        &self,
        cwd: &Path,
        env_data_dir: Option<PathBuf>,
    ) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => {
                let fallback = cwd.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    AppConfig::from_file(&fallback)?
                } else {
                    AppConfig::default()
                }
            }
        };

        if self.ephemeral {
            config.store_mut().set_backend(StoreBackend::Memory);
        } else if let Some(backend) = self.backend {
            config.store_mut().set_backend(backend);
        }

        if let Some(dir) = self.data_dir.clone().or(env_data_dir) {
            config.store_mut().set_data_dir(dir);
        }

        if let Some(file) = &self.log_file {
            config.log_mut().set_file(file.clone());
        }

        Ok(config)
    }
}
