//! Types shared by the orchestrator and its callers

use crate::ports::judge::JudgeError;
use ogiri_domain::{BoardLoadState, EvaluationResult};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Requests accepted by [`GameOrchestrator::run`](super::GameOrchestrator::run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Submit an answer for the current topic
    Submit(String),
    /// Re-run evaluation with the last recorded answer
    Retry,
    /// Move on to a fresh topic
    NextTopic,
    /// Abort the in-flight evaluation
    CancelEvaluation,
    Quit,
}

/// The one evaluation attempt that is allowed to land
pub(super) struct InFlight {
    pub(super) attempt: u64,
    pub(super) cancel: CancellationToken,
}

/// Sent back to the control flow when an evaluation task finishes
#[derive(Debug)]
pub(super) struct EvaluationCompletion {
    pub(super) attempt: u64,
    pub(super) outcome: Result<EvaluationResult, JudgeError>,
}

/// Whatever woke the run loop
pub(super) enum LoopEvent {
    Command(GameCommand),
    Completion(EvaluationCompletion),
    Board(BoardLoadState),
    Frame(Instant),
}
