//! Game surface port
//!
//! Capability toggles the orchestrator drives on every state transition.
//! Implementations live in the presentation layer.

use ogiri_domain::EvaluationResult;

pub trait GameSurface: Send + Sync {
    /// Enable or disable answer entry
    fn set_input_enabled(&self, enabled: bool);

    fn show_loading(&self);

    fn hide_loading(&self);

    /// Show the judgment. `is_failure` selects the retry affordance instead
    /// of "next".
    fn show_result(&self, result: &EvaluationResult, is_failure: bool);

    fn hide_result(&self);

    /// Empty the answer field
    fn clear_answer(&self);
}

/// Surface that ignores everything, for headless runs
pub struct NoGameSurface;

impl GameSurface for NoGameSurface {
    fn set_input_enabled(&self, _enabled: bool) {}
    fn show_loading(&self) {}
    fn hide_loading(&self) {}
    fn show_result(&self, _result: &EvaluationResult, _is_failure: bool) {}
    fn hide_result(&self) {}
    fn clear_answer(&self) {}
}
