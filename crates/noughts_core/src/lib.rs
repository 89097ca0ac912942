//! Pure noughts and crosses game logic.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of tri-state cells
//! - **Rules**: win and draw detection over the 8 fixed lines
//! - **Game**: turn state machine that owns the board
//! - **Advisor**: fixed-priority heuristic that suggests a move
//! - **Scores**: tallies and player names across games
//!
//! Nothing in this crate performs I/O.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, GameStatus, Marker, ScoreTracker, WinningLine};
//!
//! let mut game = Game::new();
//! let mut scores = ScoreTracker::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let outcome = game.apply_move(index).unwrap();
//!     scores.record_outcome(outcome.status);
//! }
//! assert_eq!(
//!     game.status(),
//!     GameStatus::Won { marker: Marker::X, line: WinningLine::TopRow }
//! );
//! assert_eq!(scores.record().player1_wins, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod score;
mod types;

pub mod advisor;
pub mod invariants;
pub mod rules;

pub use advisor::{Advice, Reason, recommend};
pub use error::{BoardError, MoveError, NameError};
pub use game::{Game, GameStatus, MoveOutcome};
pub use position::Position;
pub use rules::{Win, WinningLine};
pub use score::{
    DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, MAX_NAME_CHARS, PlayerSlot, ScoreRecord,
    ScoreTracker,
};
pub use types::{Board, Cell, Marker};
