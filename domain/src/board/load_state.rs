//! Board loading lifecycle.
//!
//! Board data arrives asynchronously; movement must wait for it. The three
//! phases are explicit so "not loaded yet" is never confused with "failed".

use super::board::Board;
use std::sync::Arc;
use thiserror::Error;

/// Why the board could not be used for this session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardLoadError {
    #[error("Board source failed: {0}")]
    Source(String),

    #[error("Board data contains no cells")]
    Empty,

    #[error("Board did not load within {0:?}")]
    TimedOut(std::time::Duration),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoardLoadState {
    #[default]
    Loading,
    Loaded(Arc<Board>),
    Failed(BoardLoadError),
}

impl BoardLoadState {
    pub fn board(&self) -> Option<&Arc<Board>> {
        match self {
            BoardLoadState::Loaded(board) => Some(board),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, BoardLoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BoardLoadState::Failed(_))
    }
}

impl From<Result<Board, BoardLoadError>> for BoardLoadState {
    fn from(result: Result<Board, BoardLoadError>) -> Self {
        match result {
            Ok(board) if board.is_empty() => BoardLoadState::Failed(BoardLoadError::Empty),
            Ok(board) => BoardLoadState::Loaded(Arc::new(board)),
            Err(e) => BoardLoadState::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cell::{BoardCell, CellType};

    #[test]
    fn test_empty_board_is_a_failure() {
        let state = BoardLoadState::from(Ok(Board::default()));
        assert!(matches!(state, BoardLoadState::Failed(BoardLoadError::Empty)));
    }

    #[test]
    fn test_loaded_board_is_available() {
        let board = Board::new(vec![BoardCell::new("a", 0, CellType::Blue, "start")]);
        let state = BoardLoadState::from(Ok(board));
        assert_eq!(state.board().map(|b| b.cell_count()), Some(1));
        assert!(!state.is_failed());
    }

    #[test]
    fn test_default_is_loading() {
        assert!(BoardLoadState::default().is_loading());
    }
}
