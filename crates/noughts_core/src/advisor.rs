//! Fixed-priority move advisor.
//!
//! The advisor is a greedy heuristic, not a game-tree search. Priorities, in
//! order: win now, block the opponent, take the center, take a corner, take
//! any free cell. Ties are broken by scan order, so when several winning
//! cells exist the first one found is returned.

use crate::rules::WinningLine;
use crate::{Board, Cell, Marker, Position};
use tracing::{debug, instrument};

/// Why the advisor picked a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Reason {
    /// Completes a line for the player.
    #[display("win")]
    Win,
    /// Stops the opponent completing a line.
    #[display("block")]
    Block,
    /// The center was free.
    #[display("center")]
    Center,
    /// A corner was free.
    #[display("corner")]
    Corner,
    /// First free cell.
    #[display("any")]
    Any,
}

/// A recommended move and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    /// Cell to play.
    pub position: Position,
    /// Rule that chose it.
    pub reason: Reason,
}

/// Recommends a cell for `player`, or `None` on a full board.
#[instrument]
pub fn recommend(board: &Board, player: Marker) -> Option<Position> {
    advise(board, player).map(|advice| advice.position)
}

/// Like [`recommend`], also reporting which rule fired.
#[instrument]
pub fn advise(board: &Board, player: Marker) -> Option<Advice> {
    let advice = completing_cell(board, player)
        .map(|position| Advice {
            position,
            reason: Reason::Win,
        })
        .or_else(|| {
            completing_cell(board, player.opponent()).map(|position| Advice {
                position,
                reason: Reason::Block,
            })
        })
        .or_else(|| {
            board.is_empty(Position::Center).then_some(Advice {
                position: Position::Center,
                reason: Reason::Center,
            })
        })
        .or_else(|| {
            Position::CORNERS
                .into_iter()
                .find(|pos| board.is_empty(*pos))
                .map(|position| Advice {
                    position,
                    reason: Reason::Corner,
                })
        })
        .or_else(|| {
            board
                .empty_positions()
                .first()
                .map(|&position| Advice {
                    position,
                    reason: Reason::Any,
                })
        });

    if let Some(advice) = advice {
        debug!(position = %advice.position, reason = %advice.reason, "Advisor picked a cell");
    }
    advice
}

/// First empty cell that would complete a line for `marker`.
///
/// Lines are scanned in order; within a line `[a, b, c]` the third cell is
/// tried first, then the middle, then the first.
fn completing_cell(board: &Board, marker: Marker) -> Option<Position> {
    let mine = Cell::Occupied(marker);
    WinningLine::ALL.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let [ca, cb, cc] = [a, b, c].map(|pos| board.get(pos));
        if ca == mine && cb == mine && cc == Cell::Empty {
            Some(c)
        } else if ca == mine && cc == mine && cb == Cell::Empty {
            Some(b)
        } else if cb == mine && cc == mine && ca == Cell::Empty {
            Some(a)
        } else {
            None
        }
    })
}
