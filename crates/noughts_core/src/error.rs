//! Error types for board, engine and score operations.
//!
//! Every error here is recoverable by the caller. Operations that return
//! them validate before mutating, so a failed call leaves state untouched.

use crate::Position;

/// Error raised by direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] usize),

    /// The cell already holds a marker.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] usize),

    /// The cell already holds a marker.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has already been won or drawn.
    #[display("Game is not active")]
    GameNotActive,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::IndexOutOfRange(index) => MoveError::IndexOutOfRange(index),
            BoardError::CellOccupied(pos) => MoveError::CellOccupied(pos),
        }
    }
}

/// Error raised when a player name edit is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NameError {
    /// The name was empty after trimming whitespace.
    #[display("Player name cannot be empty")]
    Empty,
}
