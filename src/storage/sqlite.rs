//! SQLite-backed key-value store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::storage::{KeyValueStore, KvEntry, StorageError, schema::kv_store};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Key-value store in a single SQLite table.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens the database at `db_path`, creating it and its table if needed.
    ///
    /// Use `":memory:"` only for throwaway checks: every call opens a fresh
    /// connection, so an in-memory database does not persist between calls.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, StorageError> {
        let store = Self { db_path };

        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StorageError::new(format!("Migrations failed: {}", e)))?;
        info!(path = %store.db_path, migrations = applied.len(), "SqliteStore ready");

        Ok(store)
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StorageError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StorageError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }
}

impl KeyValueStore for SqliteStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.connection()?;
        let value = kv_store::table
            .find(key)
            .select(kv_store::value)
            .first::<String>(&mut conn)
            .optional()?;
        debug!(found = value.is_some(), "Key looked up");
        Ok(value)
    }

    #[instrument(skip(self, value))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.connection()?;
        let entry = KvEntry::new(key.to_string(), value.to_string());
        diesel::replace_into(kv_store::table)
            .values(&entry)
            .execute(&mut conn)?;
        debug!(bytes = value.len(), "Key stored");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.connection()?;
        let removed = diesel::delete(kv_store::table.find(key)).execute(&mut conn)?;
        debug!(removed, "Key removed");
        Ok(())
    }
}
