//! State transitions, their surface side effects, and the countdown

use super::GameOrchestrator;
use crate::ports::game_event::GameEvent;
use crate::ports::judge::Judge;
use ogiri_domain::{CountdownSignal, EvaluationResult, GameState};
use tokio::time::Instant;
use tracing::info;

impl<J: Judge + 'static> GameOrchestrator<J> {
    pub(super) fn enter_awaiting_input(&mut self) {
        self.surface.set_input_enabled(true);
        self.surface.hide_loading();
        self.surface.hide_result();
        self.timeout_latch = false;
        self.countdown.start();
        self.frame_clock = Instant::now();
        self.set_state(GameState::AwaitingInput);
        self.events
            .publish(GameEvent::CountdownTick(self.countdown.remaining()));
    }

    pub(super) fn enter_evaluating(&mut self) {
        self.surface.set_input_enabled(false);
        self.surface.show_loading();
        self.surface.hide_result();
        self.countdown.stop();
        self.set_state(GameState::Evaluating);
    }

    pub(super) fn enter_showing_result(&mut self, result: &EvaluationResult) {
        self.surface.set_input_enabled(false);
        self.surface.hide_loading();
        self.countdown.stop();
        self.surface.show_result(result, result.is_failure());
        self.set_state(GameState::ShowingResult);
    }

    fn set_state(&mut self, next: GameState) {
        if self.state == next {
            return;
        }
        info!("State: {} -> {}", self.state, next);
        self.state = next;
        self.events.publish(GameEvent::StateChanged(next));
    }

    /// Advance the countdown by the time since the last frame.
    pub(crate) fn advance_countdown_to(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.frame_clock);
        self.frame_clock = now;

        for signal in self.countdown.advance(elapsed) {
            match signal {
                CountdownSignal::Tick(remaining) => {
                    self.events.publish(GameEvent::CountdownTick(remaining))
                }
                CountdownSignal::Timeout => {
                    self.events.publish(GameEvent::CountdownTimeout);
                    self.handle_timeout();
                }
            }
        }
    }
}
