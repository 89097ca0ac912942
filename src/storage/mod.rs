//! Persistence for player names and score tallies.
//!
//! The scoreboard is one JSON record in a string key-value store. Any
//! [`KeyValueStore`] is a [`PersistenceGateway`].

mod error;
mod gateway;
mod memory;
mod models;
mod schema; // Diesel generated schema - internal use only
mod sqlite;

pub use error::StorageError;
pub use gateway::{KeyValueStore, PersistenceGateway, RECORD_KEY};
pub use memory::MemoryStore;
pub(crate) use models::KvEntry;
pub use sqlite::SqliteStore;
