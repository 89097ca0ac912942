//! First-class invariants for the game engine.
//!
//! Invariants are properties that hold after every engine operation. The
//! engine checks them in debug builds; tests check them directly.

use crate::rules;
use crate::{Cell, Game, GameStatus, Marker};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has placed as many markers as O, or exactly one more.
pub struct BalancedCounts;

impl Invariant<Game> for BalancedCounts {
    fn holds(game: &Game) -> bool {
        game.board().marker_to_move().is_some()
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: the status agrees with the board.
///
/// In progress, no line is complete, a cell is free and the marker to move
/// matches the placed counts. Won, the winner made the last placement and
/// owns every completed line, the reported one included. Drawn, the board is
/// full with no line.
pub struct StatusMatchesBoard;

impl Invariant<Game> for StatusMatchesBoard {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::InProgress { turn } => {
                rules::evaluate(board).is_none()
                    && !board.is_full()
                    && board.marker_to_move() == Some(turn)
            }
            GameStatus::Won { marker, line } => {
                line.owner(board) == Some(marker)
                    && rules::completed_lines(board)
                        .iter()
                        .all(|win| win.marker == marker)
                    && board.marker_to_move() == Some(marker.opponent())
            }
            GameStatus::Draw => {
                rules::evaluate(board).is_none()
                    && board.is_full()
                    && board.marker_to_move() == Some(Marker::O)
            }
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board"
    }
}

/// Invariant: history lists each occupied cell exactly once.
pub struct HistoryConsistent;

impl Invariant<Game> for HistoryConsistent {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        let mut seen = [false; 9];
        for pos in history {
            let index = pos.to_index();
            if seen[index] || game.board().is_empty(*pos) {
                return false;
            }
            seen[index] = true;
        }

        history.len() == occupied
    }

    fn description() -> &'static str {
        "History matches the occupied cells"
    }
}

/// All engine invariants as a composable set.
pub type TicTacToeInvariants = (BalancedCounts, StatusMatchesBoard, HistoryConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WinningLine;
    use crate::{Board, Position};

    fn board_with(placements: &[(usize, Marker)]) -> Board {
        let mut board = Board::new();
        for &(index, marker) in placements {
            board.place(index, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TicTacToeInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_game() {
        let mut game = Game::new();
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            if game.apply_move(index).is_err() {
                break;
            }
            assert!(TicTacToeInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_corrupted_board() {
        // X center, then two O markers the history never saw
        let board = board_with(&[(4, Marker::X), (0, Marker::O), (1, Marker::O)]);
        let corrupted = Game::from_parts(board, GameStatus::default(), vec![Position::Center]);

        let violations = TicTacToeInvariants::check_all(&corrupted).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_in_progress_with_completed_line_violates() {
        let board = board_with(&[
            (0, Marker::X),
            (3, Marker::O),
            (1, Marker::X),
            (4, Marker::O),
            (2, Marker::X),
        ]);
        let history = [0, 3, 1, 4, 2]
            .into_iter()
            .filter_map(Position::from_index)
            .collect();
        let game = Game::from_parts(board, GameStatus::InProgress { turn: Marker::O }, history);

        let violations = TicTacToeInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(StatusMatchesBoard::description())]
        );
    }

    #[test]
    fn test_won_with_both_markers_owning_lines_violates() {
        let board = board_with(&[
            (0, Marker::X),
            (3, Marker::O),
            (1, Marker::X),
            (4, Marker::O),
            (2, Marker::X),
            (5, Marker::O),
        ]);
        let history = [0, 3, 1, 4, 2, 5]
            .into_iter()
            .filter_map(Position::from_index)
            .collect();
        let status = GameStatus::Won {
            marker: Marker::O,
            line: WinningLine::MiddleRow,
        };
        let game = Game::from_parts(board, status, history);

        assert!(!StatusMatchesBoard::holds(&game));
    }
}
