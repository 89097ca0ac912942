//! Win detection logic.

use crate::{Board, Cell, Marker, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 lines that wins the game when uniformly marked.
///
/// Variants are declared in scan order: rows, then columns, then diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    Diagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in scan order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::Diagonal,
        WinningLine::AntiDiagonal,
    ];

    /// The three positions of this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinningLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinningLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinningLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinningLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinningLine::Diagonal => [TopLeft, Center, BottomRight],
            WinningLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.cells().map(Position::to_index)
    }

    /// Returns the marker if all three cells hold it.
    pub fn owner(self, board: &Board) -> Option<Marker> {
        let [a, b, c] = self.cells().map(|pos| board.get(pos));
        match a {
            Cell::Occupied(marker) if a == b && b == c => Some(marker),
            _ => None,
        }
    }
}

/// A completed line and the marker that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning marker.
    pub marker: Marker,
    /// The completed line, for highlighting.
    pub line: WinningLine,
}

/// Returns the first complete line in scan order, or `None`.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Win> {
    WinningLine::ALL
        .iter()
        .find_map(|&line| line.owner(board).map(|marker| Win { marker, line }))
}

/// Returns every complete line on the board, in scan order.
///
/// A single move can complete two lines at once. Only hand-built boards can
/// hold lines for both markers.
#[instrument]
pub fn completed_lines(board: &Board) -> Vec<Win> {
    WinningLine::ALL
        .iter()
        .filter_map(|&line| line.owner(board).map(|marker| Win { marker, line }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(placements: &[(usize, Marker)]) -> Board {
        let mut board = Board::new();
        for &(index, marker) in placements {
            board.place(index, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Marker::X), (1, Marker::X), (2, Marker::X)]);
        assert_eq!(
            evaluate(&board),
            Some(Win {
                marker: Marker::X,
                line: WinningLine::TopRow
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Marker::O), (4, Marker::O), (6, Marker::O)]);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.marker, Marker::O);
        assert_eq!(win.line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Marker::X), (1, Marker::X), (2, Marker::O)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_ties() {
        // Column 0 and the top row both complete; rows come first.
        let board = board_with(&[
            (0, Marker::X),
            (1, Marker::X),
            (2, Marker::X),
            (3, Marker::X),
            (6, Marker::X),
        ]);
        assert_eq!(evaluate(&board).unwrap().line, WinningLine::TopRow);

        let all: Vec<_> = completed_lines(&board).iter().map(|w| w.line).collect();
        assert_eq!(all, vec![WinningLine::TopRow, WinningLine::LeftColumn]);
    }

    #[test]
    fn test_lines_cover_document_order() {
        let indices: Vec<_> = WinningLine::ALL.iter().map(|l| l.indices()).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }
}
