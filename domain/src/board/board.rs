//! Board entity

use super::cell::BoardCell;

/// Ordered, immutable sequence of cells indexed `0..len`.
///
/// Construction re-indexes the cells so that `cell.index` always equals the
/// cell's position in the sequence, whatever the source data claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Vec<BoardCell>,
}

impl Board {
    pub fn new(cells: Vec<BoardCell>) -> Self {
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(i, mut cell)| {
                cell.index = i;
                cell
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Option<&BoardCell> {
        self.cells.get(index)
    }

    /// Index of the last cell, `None` for an empty board
    pub fn last_index(&self) -> Option<usize> {
        self.cells.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cell::CellType;

    fn cells(n: usize) -> Vec<BoardCell> {
        (0..n)
            .map(|i| BoardCell::new(format!("c{i}"), 99, CellType::Normal, ""))
            .collect()
    }

    #[test]
    fn test_reindexes_cells() {
        let board = Board::new(cells(3));
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(cell.index, i);
        }
    }

    #[test]
    fn test_valid_index_bounds() {
        let board = Board::new(cells(4));
        assert!(board.is_valid_index(0));
        assert!(board.is_valid_index(3));
        assert!(!board.is_valid_index(4));
        assert_eq!(board.last_index(), Some(3));
        assert!(board.cell(4).is_none());
    }

    #[test]
    fn test_empty_board() {
        let board = Board::default();
        assert!(board.is_empty());
        assert!(!board.is_valid_index(0));
        assert_eq!(board.last_index(), None);
    }
}
