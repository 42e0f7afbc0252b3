//! Movement rules

use crate::board::board::Board;
use crate::evaluation::result::EvaluationResult;

/// Steps a player moves for an evaluated answer.
///
/// A blank answer (the countdown ran out) never moves, whatever the judge
/// said about it, and neither does a failed evaluation.
pub fn movement_steps(result: &EvaluationResult, answer: &str) -> u32 {
    if answer.trim().is_empty() || result.is_failure() {
        return 0;
    }
    u32::from(result.score())
}

/// Where a move started and ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: usize,
    pub to: usize,
    pub requested: u32,
}

impl MoveOutcome {
    pub fn steps_taken(&self) -> usize {
        self.to - self.from
    }

    /// Movement was cut short by the end of the board
    pub fn truncated(&self) -> bool {
        self.steps_taken() < self.requested as usize
    }
}

/// Cells visited one step at a time from `start`, stopping at the last cell.
/// The start cell itself is not included.
pub fn plan_path(board: &Board, start: usize, steps: u32) -> Vec<usize> {
    (1..=steps as usize)
        .map(|i| start + i)
        .take_while(|&next| board.is_valid_index(next))
        .collect()
}
