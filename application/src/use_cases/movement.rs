//! Movement executor
//!
//! Moves a player one cell at a time along the board, pausing between
//! steps so observers can animate each hop.

use ogiri_domain::{Board, MoveOutcome, Player, plan_path};
use std::time::Duration;
use tracing::debug;

pub struct MovementExecutor {
    step_interval: Duration,
}

impl MovementExecutor {
    pub fn new(step_interval: Duration) -> Self {
        Self { step_interval }
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Move `player` up to `steps` cells forward, never past the last cell.
    /// `on_step` runs after every single-cell move.
    pub async fn move_player(
        &self,
        player: &mut Player,
        board: &Board,
        steps: u32,
        mut on_step: impl FnMut(&Player),
    ) -> MoveOutcome {
        let from = player.position();
        for next in plan_path(board, from, steps) {
            player.move_to(next);
            on_step(player);
            if !self.step_interval.is_zero() {
                tokio::time::sleep(self.step_interval).await;
            }
        }

        let outcome = MoveOutcome {
            from,
            to: player.position(),
            requested: steps,
        };
        if outcome.truncated() {
            debug!(
                "{} stopped at the last cell after {} of {} steps",
                player.name(),
                outcome.steps_taken(),
                steps
            );
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogiri_domain::{BoardCell, CellType};
    use tokio::time::Instant;

    fn board(n: usize) -> Board {
        Board::new(
            (0..n)
                .map(|i| BoardCell::new(format!("c{i}"), i, CellType::Normal, ""))
                .collect(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_moves_one_step_at_a_time() {
        let executor = MovementExecutor::new(Duration::from_millis(100));
        let mut player = Player::new("A");
        let mut seen = Vec::new();
        let started = Instant::now();

        let outcome = executor
            .move_player(&mut player, &board(10), 4, |p| seen.push(p.position()))
            .await;

        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(outcome.steps_taken(), 4);
        assert!(!outcome.truncated());
        assert_eq!(player.position(), 4);
        assert!(started.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_at_last_cell() {
        let executor = MovementExecutor::new(Duration::from_millis(100));
        let mut player = Player::new("A");
        player.move_to(8);

        let outcome = executor.move_player(&mut player, &board(10), 6, |_| {}).await;

        assert_eq!(player.position(), 9);
        assert_eq!(outcome.from, 8);
        assert_eq!(outcome.to, 9);
        assert!(outcome.truncated());
    }

    #[tokio::test]
    async fn test_zero_steps_is_noop() {
        let executor = MovementExecutor::new(Duration::ZERO);
        let mut player = Player::new("A");
        let mut calls = 0;

        let outcome = executor
            .move_player(&mut player, &board(10), 0, |_| calls += 1)
            .await;

        assert_eq!(calls, 0);
        assert_eq!(outcome.steps_taken(), 0);
        assert_eq!(player.position(), 0);
    }
}
