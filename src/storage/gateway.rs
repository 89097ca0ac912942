//! Persistence contract for the scoreboard.

use noughts_core::ScoreRecord;
use tracing::{debug, info, instrument};

use crate::storage::StorageError;

/// Key the scoreboard is stored under.
pub const RECORD_KEY: &str = "noughtsAndCrossesData";

/// String key-value storage.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Loads and saves the scoreboard as a single opaque record.
pub trait PersistenceGateway {
    /// Returns the stored record, or `None` if nothing was saved.
    fn load(&self) -> Result<Option<ScoreRecord>, StorageError>;

    /// Replaces the stored record.
    fn save(&mut self, record: &ScoreRecord) -> Result<(), StorageError>;

    /// Deletes the stored record.
    fn clear(&mut self) -> Result<(), StorageError>;
}

impl<S: KeyValueStore> PersistenceGateway for S {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Option<ScoreRecord>, StorageError> {
        let Some(json) = self.get(RECORD_KEY)? else {
            debug!("No stored record");
            return Ok(None);
        };
        let record = serde_json::from_str(&json)?;
        debug!("Stored record loaded");
        Ok(Some(record))
    }

    #[instrument(skip(self, record))]
    fn save(&mut self, record: &ScoreRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        self.set(RECORD_KEY, &json)?;
        debug!("Record saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&mut self) -> Result<(), StorageError> {
        self.remove(RECORD_KEY)?;
        info!("Stored record cleared");
        Ok(())
    }
}
