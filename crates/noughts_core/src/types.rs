//! Core domain types for noughts and crosses.

use crate::{BoardError, PlayerSlot, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's marker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Marker {
    /// Crosses (always moves first).
    #[display("X")]
    X,
    /// Noughts (moves second).
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// The seat that plays this marker: X is player one.
    pub fn slot(self) -> PlayerSlot {
        match self {
            Marker::X => PlayerSlot::One,
            Marker::O => PlayerSlot::Two,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker placed.
    #[default]
    Empty,
    /// Holds a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// True if no marker has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if `index` is not 0-8.
    #[instrument(skip(self))]
    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange(index))
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places a marker at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] for an index outside 0-8 and
    /// [`BoardError::CellOccupied`] if the cell already holds a marker. The
    /// board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<(), BoardError> {
        let pos = Position::from_index(index).ok_or(BoardError::IndexOutOfRange(index))?;
        if !self.is_empty(pos) {
            return Err(BoardError::CellOccupied(pos));
        }
        self.cells[index] = Cell::Occupied(marker);
        Ok(())
    }

    /// True iff no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(marker))
            .count()
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The marker due to move, derived from the placed counts.
    ///
    /// X moves whenever the counts are equal. Returns `None` if the counts
    /// are inconsistent.
    pub fn marker_to_move(&self) -> Option<Marker> {
        let x = self.count(Marker::X);
        let o = self.count(Marker::O);
        match x.checked_sub(o) {
            Some(0) => Some(Marker::X),
            Some(1) => Some(Marker::O),
            _ => None,
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so players can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(marker) => marker.to_string(),
                };
                result.push(' ');
                result.push_str(&symbol);
                result.push(' ');
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_slot_pairs_with_slot_marker() {
        assert_eq!(Marker::X.slot(), PlayerSlot::One);
        assert_eq!(Marker::O.slot(), PlayerSlot::Two);
        for marker in [Marker::X, Marker::O] {
            assert_eq!(marker.slot().marker(), marker);
        }
    }

    #[test]
    fn test_empty_positions_in_index_order() {
        let mut board = Board::new();
        board.place(4, Marker::X).unwrap();
        board.place(0, Marker::O).unwrap();
        assert_eq!(board.empty_positions().len(), 7);
        assert_eq!(board.empty_positions().first(), Some(&Position::TopCenter));
        board.place(1, Marker::X).unwrap();
        assert_eq!(board.empty_positions().first(), Some(&Position::TopRight));
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(8), Ok(Cell::Empty));
        assert_eq!(board.cell_at(9), Err(BoardError::IndexOutOfRange(9)));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(4, Marker::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(4, Marker::O),
            Err(BoardError::CellOccupied(Position::Center))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for index in 0..9 {
            assert!(!board.is_full());
            let marker = if index % 2 == 0 { Marker::X } else { Marker::O };
            board.place(index, marker).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_marker_to_move_follows_counts() {
        let mut board = Board::new();
        assert_eq!(board.marker_to_move(), Some(Marker::X));
        board.place(0, Marker::X).unwrap();
        assert_eq!(board.marker_to_move(), Some(Marker::O));
        board.place(1, Marker::O).unwrap();
        assert_eq!(board.marker_to_move(), Some(Marker::X));

        board.place(2, Marker::O).unwrap();
        assert_eq!(board.marker_to_move(), None);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.place(0, Marker::X).unwrap();
        board.place(8, Marker::O).unwrap();
        let text = board.display();
        assert!(text.starts_with(" X | 2 | 3 "));
        assert!(text.ends_with(" 7 | 8 | O "));
    }
}
