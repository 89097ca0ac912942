//! Tests for the key-value stores and the record gateway.

use noughts_and_crosses::{
    KeyValueStore, MemoryStore, PersistenceGateway, RECORD_KEY, ScoreRecord, SqliteStore,
};
use tempfile::NamedTempFile;

/// Creates a temporary database file with the table in place. The file
/// handle must stay in scope to keep the file alive.
fn setup_test_db() -> (NamedTempFile, SqliteStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = SqliteStore::open(db_path).expect("Failed to open store");
    (db_file, store)
}

fn sample_record() -> ScoreRecord {
    ScoreRecord {
        player1_wins: 7,
        player2_wins: 4,
        draws: 2,
        player1_name: "Ada".to_string(),
        player2_name: "Grace".to_string(),
    }
}

#[test]
fn test_sqlite_get_missing_key() {
    let (_db, store) = setup_test_db();
    assert_eq!(store.get("nothing").unwrap(), None);
}

#[test]
fn test_sqlite_set_replaces_value() {
    let (_db, mut store) = setup_test_db();
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn test_sqlite_remove_is_idempotent() {
    let (_db, mut store) = setup_test_db();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_sqlite_reopen_runs_migrations_once() {
    let (db, mut store) = setup_test_db();
    store.set("k", "v").unwrap();

    let reopened = SqliteStore::open(db.path().to_str().unwrap().to_string()).unwrap();
    assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_gateway_round_trip_sqlite() {
    let (_db, mut store) = setup_test_db();
    assert_eq!(store.load().unwrap(), None);
    store.save(&sample_record()).unwrap();
    assert_eq!(store.load().unwrap(), Some(sample_record()));
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_gateway_round_trip_memory() {
    let mut store = MemoryStore::new();
    store.save(&sample_record()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.load().unwrap(), Some(sample_record()));
    store.clear().unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_record_stored_as_json_under_fixed_key() {
    let mut store = MemoryStore::new();
    store.save(&sample_record()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&store.get(RECORD_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(json["player1Name"], "Ada");
    assert_eq!(json["scores"]["player1"], 7);
    assert_eq!(json["scores"]["draws"], 2);
}

#[test]
fn test_record_without_names_loads_with_defaults() {
    let (_db, mut store) = setup_test_db();
    store
        .set(RECORD_KEY, r#"{"scores":{"player1":3}}"#)
        .unwrap();

    let record = store.load().unwrap().unwrap();
    assert_eq!(record.player1_name, "Player 1");
    assert_eq!(record.player2_name, "Player 2");
    assert_eq!(record.player1_wins, 3);
}

#[test]
fn test_malformed_record_is_an_error() {
    let mut store = MemoryStore::new();
    store.set(RECORD_KEY, "[1, 2, 3").unwrap();
    let err = store.load().unwrap_err();
    assert!(err.message.contains("Malformed record"));
}

#[test]
fn test_open_bad_path_fails() {
    let result = SqliteStore::open("/no/such/dir/scores.db".to_string());
    assert!(result.is_err());
}
