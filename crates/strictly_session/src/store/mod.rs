//! Key-value persistence for the score record.
//!
//! The session only ever talks to a [`KeyValueStore`]. Which backend sits
//! behind it is decided once, at process start, by [`select_store`].

mod file;
mod memory;
mod null;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use null::NullStore;

use std::ffi::OsString;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{StoreConfig, StoreError};

/// A string key-value store.
pub trait KeyValueStore: std::fmt::Debug + Send {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}

/// Which persistence backend to use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    /// One file per key in the data directory.
    #[default]
    File,
    /// Process-local map, lost on exit.
    Memory,
    /// Discards writes, never has data.
    None,
}

/// Builds the configured store, resolving the default data directory from
/// the process environment.
pub fn select_store(config: &StoreConfig) -> Box<dyn KeyValueStore> {
    select_store_from(
        config,
        std::env::var_os("XDG_DATA_HOME"),
        std::env::var_os("HOME"),
    )
}

/// Builds the configured store with explicit `$XDG_DATA_HOME` and `$HOME`
/// values.
///
/// Falls back to [`NullStore`] when the file backend has no usable data
/// directory, so the game still runs without persistence.
#[instrument(skip(config, xdg_data_home, home), fields(backend = %config.backend()))]
pub fn select_store_from(
    config: &StoreConfig,
    xdg_data_home: Option<OsString>,
    home: Option<OsString>,
) -> Box<dyn KeyValueStore> {
    let store: Box<dyn KeyValueStore> = match config.backend() {
        StoreBackend::File => match config.resolve_data_dir_from(xdg_data_home, home) {
            Some(dir) => Box::new(FileStore::new(dir)),
            None => {
                warn!("No data directory available, scores will not be saved");
                Box::new(NullStore)
            }
        },
        StoreBackend::Memory => Box::new(MemoryStore::new()),
        StoreBackend::None => Box::new(NullStore),
    };
    info!(backend = store.backend_name(), "Store selected");
    store
}

/// Rejects keys that are empty or could escape a directory.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::new(format!("Invalid store key '{}'", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_backend_parses_lowercase() {
        assert_eq!("file".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("none".parse::<StoreBackend>().unwrap(), StoreBackend::None);
        assert!("redis".parse::<StoreBackend>().is_err());
        assert_eq!(StoreBackend::Memory.to_string(), "memory");
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("ttt_scores_v1").is_ok());
        assert!(validate_key("a.b-c").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a/b").is_err());
    }

    #[test]
    fn test_select_memory_and_none() {
        let config = StoreConfig::new(StoreBackend::Memory, None);
        assert_eq!(select_store(&config).backend_name(), "memory");

        let config = StoreConfig::new(StoreBackend::None, None);
        assert_eq!(select_store(&config).backend_name(), "none");
    }

    #[test]
    fn test_select_file_with_explicit_dir() {
        let config = StoreConfig::new(StoreBackend::File, Some(PathBuf::from("/tmp/scores")));
        assert_eq!(select_store(&config).backend_name(), "file");
    }

    #[test]
    fn test_file_backend_without_data_dir_falls_back_to_none() {
        let config = StoreConfig::new(StoreBackend::File, None);
        assert_eq!(select_store_from(&config, None, None).backend_name(), "none");
        assert_eq!(
            select_store_from(&config, Some("".into()), Some("".into())).backend_name(),
            "none"
        );
    }

    #[test]
    fn test_file_backend_uses_home_when_xdg_unset() {
        let config = StoreConfig::new(StoreBackend::File, None);
        let store = select_store_from(&config, None, Some("/home/ana".into()));
        assert_eq!(store.backend_name(), "file");
    }
}
