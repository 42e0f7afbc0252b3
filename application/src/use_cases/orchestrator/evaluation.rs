//! Evaluation lifecycle: start, completion, and what a result sets in motion

use super::GameOrchestrator;
use super::types::{EvaluationCompletion, InFlight};
use crate::ports::game_event::GameEvent;
use crate::ports::judge::{Judge, JudgeError};
use ogiri_domain::{
    BoardLoadError, BoardLoadState, CellEffect, EvaluationResult, apply_cell_effect,
    movement_steps,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

impl<J: Judge + 'static> GameOrchestrator<J> {
    /// Start evaluating `answer` against the current topic, cancelling any
    /// attempt still in flight first.
    pub(super) fn begin_evaluation(&mut self, answer: String) -> bool {
        let Some(topic) = self.current_topic.clone() else {
            warn!("No topic selected; nothing to evaluate");
            return false;
        };

        if self.cancel_in_flight() {
            debug!("Superseded the previous evaluation");
        }

        self.next_attempt += 1;
        let attempt = self.next_attempt;
        let cancel = CancellationToken::new();
        self.in_flight = Some(InFlight {
            attempt,
            cancel: cancel.clone(),
        });
        self.last_answer = Some(answer.clone());

        self.enter_evaluating();
        info!("Evaluation {} started", attempt);
        self.events.publish(GameEvent::EvaluationStarted {
            answer: answer.clone(),
        });

        let judge = self.judge.clone();
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            // Inner task so a panicking judge surfaces as a JoinError
            let task =
                tokio::spawn(async move { judge.evaluate(&topic, &answer, &cancel).await });
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Evaluation task {} failed: {}", attempt, e);
                    Err(JudgeError::Internal(e.to_string()))
                }
            };
            // The orchestrator may have shut down
            let _ = completions.send(EvaluationCompletion { attempt, outcome });
        });
        true
    }

    /// Cancel the live attempt, if any. Its completion becomes stale.
    pub(super) fn cancel_in_flight(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.cancel.cancel();
                info!("Evaluation {} cancelled", in_flight.attempt);
                true
            }
            None => false,
        }
    }

    pub(super) async fn handle_completion(&mut self, completion: EvaluationCompletion) {
        let current = self.in_flight.as_ref().map(|f| f.attempt);
        if current != Some(completion.attempt) {
            debug!("Discarding stale evaluation {}", completion.attempt);
            return;
        }
        self.in_flight = None;

        match completion.outcome {
            Ok(result) => self.apply_result(result).await,
            Err(JudgeError::Cancelled) => {
                info!("Evaluation {} was cancelled", completion.attempt);
                self.events.publish(GameEvent::EvaluationCancelled);
                self.enter_awaiting_input();
            }
            Err(e) => {
                error!("Evaluation {} aborted: {}", completion.attempt, e);
                self.events
                    .publish(GameEvent::EvaluationAborted { error: e.to_string() });
                self.enter_awaiting_input();
            }
        }
    }

    async fn apply_result(&mut self, result: EvaluationResult) {
        let failed = result.is_failure();
        self.last_result_failed = failed;
        info!(
            "Judged: score={} comment={:?} failed={}",
            result.score(),
            result.comment(),
            failed
        );

        self.enter_showing_result(&result);
        self.events
            .publish(GameEvent::EvaluationCompleted(result.clone()));

        if failed {
            return;
        }

        let answer = self.last_answer.as_deref().unwrap_or_default();
        let steps = movement_steps(&result, answer);
        if steps > 0 {
            self.move_current_player(steps, result.score()).await;
        } else {
            debug!("No movement this turn");
            if let Some(player) = self.turns.current() {
                self.events.publish(GameEvent::PlayerUpdated(player.clone()));
            }
        }
        self.log_player_status();

        if !self.game_over {
            self.advance_turn();
        }
    }

    async fn move_current_player(&mut self, steps: u32, score: u8) {
        let state = self.board.ready().await;
        let Some(board) = state.board().cloned() else {
            if let BoardLoadState::Failed(e) = state {
                self.report_board_failure(e);
            }
            warn!("Board unavailable; movement skipped");
            return;
        };

        let Some(player) = self.turns.current_mut() else {
            warn!("No current player to move");
            return;
        };

        let events = &self.events;
        let outcome = self
            .movement
            .move_player(player, &board, steps, |p| {
                events.publish(GameEvent::PlayerStepped(p.clone()))
            })
            .await;
        events.publish(GameEvent::PlayerUpdated(player.clone()));

        // A move cut short at the board end still lands on its cell
        let Some(cell) = board.cell(outcome.to) else {
            return;
        };

        let effect = apply_cell_effect(
            player,
            cell.cell_type,
            score,
            &self.params.cell_rules,
            self.rng.as_mut(),
        );
        debug!("{} landed on {} cell: {:?}", player.name(), cell.cell_type, effect);
        events.publish(GameEvent::CellEffectApplied {
            player: player.clone(),
            cell_type: cell.cell_type,
            effect,
        });

        match effect {
            CellEffect::None | CellEffect::Penalty { amount: 0, .. } => {}
            CellEffect::Bonus { reached_win, .. } => {
                events.publish(GameEvent::PlayerUpdated(player.clone()));
                if reached_win && !self.game_over {
                    self.game_over = true;
                    info!("{} wins with {}", player.name(), player.money());
                    events.publish(GameEvent::GameOver {
                        winner: player.clone(),
                    });
                }
            }
            CellEffect::Penalty { .. } => {
                events.publish(GameEvent::PlayerUpdated(player.clone()));
            }
        }
    }

    fn advance_turn(&mut self) {
        let Some(player) = self.turns.next_turn().cloned() else {
            warn!("No players seated; turn unchanged");
            return;
        };
        let index = self.turns.current_index().unwrap_or_default();
        info!("Turn: {}", player.name());
        self.events
            .publish(GameEvent::TurnChanged { index, player });
    }

    fn log_player_status(&self) {
        for player in self.turns.players() {
            info!("{}", player);
        }
    }

    pub(super) fn report_board_failure(&mut self, error: BoardLoadError) {
        if self.board_failure_reported {
            return;
        }
        self.board_failure_reported = true;
        error!("Board unavailable for this session: {}", error);
        self.events.publish(GameEvent::BoardUnavailable(error));
    }
}
