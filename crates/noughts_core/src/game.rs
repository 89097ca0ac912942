//! Game engine: owns the board and drives the turn state machine.

use crate::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use crate::rules::{self, WinningLine};
use crate::{Board, Marker, MoveError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
///
/// Transitions only go from `InProgress` to a terminal status. A reset is
/// needed to play again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; `turn` is due to move.
    InProgress {
        /// The marker to move next.
        turn: Marker,
    },
    /// Game ended with `marker` completing `line`.
    Won {
        /// The winning marker.
        marker: Marker,
        /// The completed line.
        line: WinningLine,
    },
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress { turn: Marker::X }
    }
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the marker was placed.
    pub position: Position,
    /// Who moved.
    pub marker: Marker,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// The completed line, if this move won the game.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Noughts and crosses game engine.
///
/// The board is only mutated through [`Game::apply_move`] and
/// [`Game::reset`]. Deserializing checks the engine invariants, so a saved
/// game whose board and status disagree is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameState")]
pub struct Game {
    board: Board,
    status: GameStatus,
    history: Vec<Position>,
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct GameState {
    board: Board,
    status: GameStatus,
    history: Vec<Position>,
}

impl TryFrom<GameState> for Game {
    type Error = InvariantViolation;

    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        let game = Self {
            board: state.board,
            status: state.status,
            history: state.history,
        };
        TicTacToeInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(game)
    }
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Marker to move, or `None` once the game is over.
    pub fn turn(&self) -> Option<Marker> {
        match self.status {
            GameStatus::InProgress { turn } => Some(turn),
            _ => None,
        }
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current marker at `index` (0-8).
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameNotActive`] once the game is won or drawn
    /// - [`MoveError::IndexOutOfRange`] for an index outside 0-8
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let GameStatus::InProgress { turn } = self.status else {
            debug!("Move rejected, game is over");
            return Err(MoveError::GameNotActive);
        };

        let position = Position::from_index(index).ok_or(MoveError::IndexOutOfRange(index))?;
        self.board.place(index, turn)?;
        self.history.push(position);

        self.status = if let Some(win) = rules::evaluate(&self.board) {
            info!(marker = %win.marker, line = ?win.line, "Game won");
            GameStatus::Won {
                marker: win.marker,
                line: win.line,
            }
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                turn: turn.opponent(),
            }
        };

        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "invariants violated after move"
        );

        Ok(MoveOutcome {
            position,
            marker: turn,
            status: self.status,
        })
    }

    /// Builds a game from raw parts without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, status: GameStatus, history: Vec<Position>) -> Self {
        Self {
            board,
            status,
            history,
        }
    }

    /// Clears the board and returns to `InProgress` with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::default();
    }
}
