//! Score record and its persistence.

use serde::{Deserialize, Serialize};
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument, warn};

use crate::{KeyValueStore, StoreError};

/// Fixed storage key of the score record.
pub const SCORES_KEY: &str = "ttt_scores_v1";

/// Win counts per player.
///
/// Serialized as `{"X":2,"O":1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

impl Scores {
    /// Creates a score record.
    pub fn new(x: u32, o: u32) -> Self {
        Self { x, o }
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Returns a copy with one more win for `player`.
    #[must_use]
    pub fn with_win(self, player: Player) -> Self {
        match player {
            Player::X => Self {
                x: self.x.saturating_add(1),
                ..self
            },
            Player::O => Self {
                o: self.o.saturating_add(1),
                ..self
            },
        }
    }

    /// Encodes the record as JSON.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a record from JSON.
    ///
    /// Both counters must be present as non-negative integers.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}

/// Reads and writes the score record under [`SCORES_KEY`].
///
/// Failures never reach the caller: a bad read yields default scores and a
/// bad write is logged and dropped. The in-memory record stays the source
/// of truth for the running session.
#[derive(Debug)]
pub struct ScoreRepository {
    store: Box<dyn KeyValueStore>,
}

impl ScoreRepository {
    /// Wraps a store.
    #[instrument(skip(store), fields(backend = store.backend_name()))]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Name of the backing store.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Loads the persisted scores, or `{0, 0}` if absent or unreadable.
    #[instrument(skip(self), fields(backend = self.store.backend_name()))]
    pub fn load(&self) -> Scores {
        let raw = match self.store.get(SCORES_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                debug!("No saved scores, starting at zero");
                return Scores::default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read scores, starting at zero");
                return Scores::default();
            }
        };

        match Scores::from_json(&raw) {
            Ok(scores) => {
                info!(x = scores.x, o = scores.o, "Scores loaded");
                scores
            }
            Err(e) => {
                warn!(error = %e, "Saved scores are malformed, starting at zero");
                Scores::default()
            }
        }
    }

    /// Persists `scores`. Returns whether the write succeeded.
    #[instrument(skip(self), fields(backend = self.store.backend_name()))]
    pub fn save(&self, scores: &Scores) -> bool {
        let result = scores
            .to_json()
            .and_then(|json| self.store.set(SCORES_KEY, &json));
        match result {
            Ok(()) => {
                debug!(x = scores.x, o = scores.o, "Scores saved");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to save scores, keeping them in memory");
                false
            }
        }
    }

    /// Deletes the persisted record. Returns whether the removal succeeded.
    #[instrument(skip(self), fields(backend = self.store.backend_name()))]
    pub fn clear(&self) -> bool {
        match self.store.remove(SCORES_KEY) {
            Ok(()) => {
                info!("Saved scores removed");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to remove saved scores");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn repo_with(raw: Option<&str>) -> (MemoryStore, ScoreRepository) {
        let store = MemoryStore::new();
        if let Some(raw) = raw {
            store.set(SCORES_KEY, raw).unwrap();
        }
        let repo = ScoreRepository::new(Box::new(store.clone()));
        (store, repo)
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(Scores::new(2, 1).to_json().unwrap(), r#"{"X":2,"O":1}"#);
    }

    #[test]
    fn test_with_win_increments_one_side() {
        let scores = Scores::default().with_win(Player::O).with_win(Player::O);
        assert_eq!(scores.get(Player::O), 2);
        assert_eq!(scores.get(Player::X), 0);
    }

    #[test]
    fn test_with_win_saturates() {
        let scores = Scores::new(u32::MAX, 0).with_win(Player::X);
        assert_eq!(scores.get(Player::X), u32::MAX);
    }

    #[test]
    fn test_load_missing_is_zero() {
        let (_store, repo) = repo_with(None);
        assert_eq!(repo.load(), Scores::default());
    }

    #[test]
    fn test_load_valid_record() {
        let (_store, repo) = repo_with(Some(r#"{"X":3,"O":5}"#));
        assert_eq!(repo.load(), Scores::new(3, 5));
    }

    #[test]
    fn test_load_corrupt_records_fall_back() {
        for raw in [
            "not json",
            "",
            "null",
            "[1,2]",
            r#"{"X":1}"#,
            r#"{"X":-1,"O":2}"#,
            r#"{"X":1.5,"O":2}"#,
            r#"{"X":"1","O":2}"#,
        ] {
            let (_store, repo) = repo_with(Some(raw));
            assert_eq!(repo.load(), Scores::default(), "raw record: {raw}");
        }
    }

    #[test]
    fn test_save_then_load() {
        let (store, repo) = repo_with(None);
        assert!(repo.save(&Scores::new(4, 2)));
        assert_eq!(store.get(SCORES_KEY).unwrap().as_deref(), Some(r#"{"X":4,"O":2}"#));
        assert_eq!(repo.load(), Scores::new(4, 2));
    }

    #[test]
    fn test_clear_removes_record() {
        let (store, repo) = repo_with(Some(r#"{"X":1,"O":1}"#));
        assert!(repo.clear());
        assert!(store.is_empty());
        assert_eq!(repo.load(), Scores::default());
    }
}
