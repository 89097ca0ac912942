//! Game rules for noughts and crosses.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the engine and the advisor can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, WinningLine, completed_lines, evaluate};
