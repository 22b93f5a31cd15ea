//! Tests for the directory-backed store and its use by a session.

use strictly_session::{
    FileStore, KeyValueStore, SCORES_KEY, ScoreRepository, Scores, Session, StoreBackend,
    StoreConfig, select_store,
};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_get_missing_key_is_none() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get(SCORES_KEY).expect("get failed"), None);
}

#[test]
fn test_set_creates_directory_and_file() {
    let dir = temp_dir();
    let data_dir = dir.path().join("nested").join("data");
    let store = FileStore::new(&data_dir);

    store.set(SCORES_KEY, r#"{"X":1,"O":2}"#).expect("set failed");

    let on_disk = std::fs::read_to_string(data_dir.join(SCORES_KEY)).expect("read failed");
    assert_eq!(on_disk, r#"{"X":1,"O":2}"#);
    assert_eq!(
        store.get(SCORES_KEY).expect("get failed").as_deref(),
        Some(r#"{"X":1,"O":2}"#)
    );
}

#[test]
fn test_set_overwrites() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path());
    store.set("k", "first").expect("set failed");
    store.set("k", "second").expect("set failed");
    assert_eq!(store.get("k").expect("get failed").as_deref(), Some("second"));
    assert!(!dir.path().join("k.tmp").exists());
}

#[test]
fn test_remove_is_idempotent() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path());
    store.set("k", "v").expect("set failed");
    store.remove("k").expect("remove failed");
    store.remove("k").expect("second remove failed");
    assert_eq!(store.get("k").expect("get failed"), None);
}

#[test]
fn test_invalid_keys_rejected() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path());
    assert!(store.set("../outside", "v").is_err());
    assert!(store.get("a/b").is_err());
    assert!(store.remove("").is_err());
}

#[test]
fn test_scores_persist_across_sessions_on_disk() {
    let dir = temp_dir();

    let mut session = Session::load(ScoreRepository::new(Box::new(FileStore::new(dir.path()))));
    // O wins the right column: X0, O2, X1, O5, X3, O8.
    for i in [0, 2, 1, 5, 3, 8] {
        session.select_index(i);
    }
    assert_eq!(session.scores(), Scores::new(0, 1));
    drop(session);

    let config = StoreConfig::new(StoreBackend::File, Some(dir.path().to_path_buf()));
    let session = Session::load(ScoreRepository::new(select_store(&config)));
    assert_eq!(session.scores(), Scores::new(0, 1));
}

#[test]
fn test_clear_then_reload_is_zero() {
    let dir = temp_dir();
    let repo = ScoreRepository::new(Box::new(FileStore::new(dir.path())));
    assert!(repo.save(&Scores::new(7, 3)));
    assert!(repo.clear());
    assert_eq!(repo.load(), Scores::default());
}
