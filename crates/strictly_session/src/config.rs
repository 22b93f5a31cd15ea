//! Application configuration loaded from TOML.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::StoreBackend;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "strictly_tictactoe";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Score persistence settings.
    #[serde(default)]
    store: StoreConfig,

    /// Log output settings.
    #[serde(default)]
    log: LogConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(backend = %config.store.backend, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Mutable access to the store settings, for command-line overrides.
    pub fn store_mut(&mut self) -> &mut StoreConfig {
        &mut self.store
    }

    /// Mutable access to the log settings, for command-line overrides.
    pub fn log_mut(&mut self) -> &mut LogConfig {
        &mut self.log
    }
}

/// Where scores are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use.
    #[serde(default)]
    backend: StoreBackend,

    /// Data directory for the file backend. Defaults to the platform data
    /// directory when unset.
    #[serde(default)]
    data_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Creates store settings.
    #[instrument]
    pub fn new(backend: StoreBackend, data_dir: Option<PathBuf>) -> Self {
        Self { backend, data_dir }
    }

    /// Overrides the backend.
    pub fn set_backend(&mut self, backend: StoreBackend) {
        self.backend = backend;
    }

    /// Overrides the data directory.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.data_dir = Some(dir);
    }

    /// Resolves the directory the file backend should use from the process
    /// environment.
    ///
    /// See [`StoreConfig::resolve_data_dir_from`].
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.resolve_data_dir_from(
            std::env::var_os("XDG_DATA_HOME"),
            std::env::var_os("HOME"),
        )
    }

    /// Resolves the file backend directory from the given `$XDG_DATA_HOME`
    /// and `$HOME` values.
    ///
    /// An explicit `data_dir` wins, then `xdg_data_home`, then
    /// `home/.local/share`. Empty values count as unset. Returns `None` when
    /// nothing is available.
    #[instrument(skip(self))]
    pub fn resolve_data_dir_from(
        &self,
        xdg_data_home: Option<OsString>,
        home: Option<OsString>,
    ) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Some(dir.clone());
        }
        let base = xdg_data_home
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                home.filter(|v| !v.is_empty())
                    .map(|home| PathBuf::from(home).join(".local").join("share"))
            })?;
        let dir = base.join(APP_DIR_NAME);
        debug!(dir = %dir.display(), "Resolved default data directory");
        Some(dir)
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. The terminal UI owns stdout, so logs go to a file.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    filter: String,
}

impl LogConfig {
    /// Overrides the log file path.
    pub fn set_file(&mut self, file: PathBuf) {
        self.file = file;
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
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
    #[instrument(skip(message))]
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
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.store().backend(), StoreBackend::File);
        assert_eq!(config.log().file(), &PathBuf::from("tictactoe.log"));
        assert_eq!(config.log().filter(), "info");
    }

    #[test]
    fn test_full_toml() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            backend = "memory"
            data_dir = "/var/lib/ttt"

            [log]
            file = "/tmp/ttt.log"
            filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(*config.store().backend(), StoreBackend::Memory);
        assert_eq!(
            config.store().data_dir().as_deref(),
            Some(Path::new("/var/lib/ttt"))
        );
        assert_eq!(config.log().filter(), "debug");
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = AppConfig::from_toml("[store]\nbackend = \"redis\"\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = StoreConfig::new(StoreBackend::File, Some(PathBuf::from("/srv/scores")));
        assert_eq!(config.resolve_data_dir(), Some(PathBuf::from("/srv/scores")));
        assert_eq!(
            config.resolve_data_dir_from(Some("/xdg".into()), Some("/home/ana".into())),
            Some(PathBuf::from("/srv/scores"))
        );
    }

    #[test]
    fn test_xdg_data_home_wins_over_home() {
        let config = StoreConfig::default();
        assert_eq!(
            config.resolve_data_dir_from(Some("/xdg".into()), Some("/home/ana".into())),
            Some(PathBuf::from("/xdg/strictly_tictactoe"))
        );
    }

    #[test]
    fn test_home_fallback() {
        let config = StoreConfig::default();
        let expected = Some(PathBuf::from("/home/ana/.local/share/strictly_tictactoe"));
        assert_eq!(
            config.resolve_data_dir_from(None, Some("/home/ana".into())),
            expected
        );
        assert_eq!(
            config.resolve_data_dir_from(Some("".into()), Some("/home/ana".into())),
            expected
        );
    }

    #[test]
    fn test_no_data_dir_available() {
        let config = StoreConfig::default();
        assert_eq!(config.resolve_data_dir_from(None, None), None);
        assert_eq!(
            config.resolve_data_dir_from(Some("".into()), Some("".into())),
            None
        );
    }
}
