//! Judge port
//!
//! What the orchestrator needs from evaluation: a topic and an answer in,
//! a score and comment out.

use async_trait::async_trait;
use ogiri_domain::{EvaluationResult, Topic};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Hard failures of an evaluation attempt.
///
/// Remote failures are not here: they come back as a failed
/// [`EvaluationResult`] so the player can retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JudgeError {
    #[error("Judge is not configured: {0}")]
    Configuration(String),

    #[error("Evaluation task failed: {0}")]
    Internal(String),

    #[error("Evaluation cancelled")]
    Cancelled,
}

impl JudgeError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, JudgeError::Cancelled)
    }
}

/// Scores answers to topics
#[async_trait]
pub trait Judge: Send + Sync {
    /// Evaluate `answer` to `topic`. Must return [`JudgeError::Cancelled`]
    /// promptly once `cancel` fires.
    async fn evaluate(
        &self,
        topic: &Topic,
        answer: &str,
        cancel: &CancellationToken,
    ) -> Result<EvaluationResult, JudgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cancelled() {
        assert!(JudgeError::Cancelled.is_cancelled());
        assert!(!JudgeError::Configuration("no key".to_string()).is_cancelled());
        assert!(!JudgeError::Internal("panic".to_string()).is_cancelled());
    }
}
