//! Noughts and crosses library - game sessions with persistent scores.
//!
//! The game rules live in [`noughts_core`]; this crate adds everything
//! around them.
//!
//! # Architecture
//!
//! - **Session**: one engine plus the scoreboard it feeds
//! - **Storage**: key-value persistence for names and tallies
//! - **Hints**: inactivity monitor that asks the advisor for a move
//! - **Console**: line-based terminal front-end
//!
//! # Example
//!
//! ```
//! use noughts_and_crosses::{GameSession, MemoryStore, PlayerSlot};
//!
//! let mut session = GameSession::open(MemoryStore::new());
//! for index in [0, 3, 1, 4, 2] {
//!     session.play(index).unwrap();
//! }
//! assert_eq!(session.scores().wins(PlayerSlot::One), 1);
//! assert_eq!(session.status_line(), "Player 1 wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod hint;
mod session;
mod storage;

pub mod console;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Hints
pub use hint::{Hint, InactivityMonitor};

// Crate-level exports - Session management
pub use session::{GameSession, TurnReport};

// Crate-level exports - Persistence
pub use storage::{
    KeyValueStore, MemoryStore, PersistenceGateway, RECORD_KEY, SqliteStore, StorageError,
};

// Crate-level exports - Game types
pub use noughts_core::{
    Board, Cell, Game, GameStatus, Marker, MoveError, MoveOutcome, NameError, PlayerSlot,
    Position, ScoreRecord, ScoreTracker, WinningLine,
};
