//! Evaluation result value object

use serde::{Deserialize, Serialize};

/// Lowest score the judge can award
pub const MIN_SCORE: u8 = 1;
/// Highest score the judge can award
pub const MAX_SCORE: u8 = 6;
/// Placeholder comment used whenever no real judgment is available
pub const FAILURE_COMMENT: &str = "Evaluation failed";

/// Clamp any raw score into `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8
}

/// Whether a result carries a real judgment.
///
/// Kept separate from the comment text so a judge that legitimately answers
/// with score 1 and the placeholder wording is not mistaken for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationOutcome {
    #[default]
    Judged,
    Failed,
}

/// Score and comment for one evaluation attempt (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    score: u8,
    comment: String,
    outcome: EvaluationOutcome,
}

impl EvaluationResult {
    /// A real judgment. The score is clamped and a blank comment is replaced
    /// with [`FAILURE_COMMENT`].
    pub fn judged(score: i64, comment: &str) -> Self {
        let comment = comment.trim();
        Self {
            score: clamp_score(score),
            comment: if comment.is_empty() {
                FAILURE_COMMENT.to_string()
            } else {
                comment.to_string()
            },
            outcome: EvaluationOutcome::Judged,
        }
    }

    /// The failure sentinel: lowest score, placeholder comment.
    pub fn failed() -> Self {
        Self {
            score: MIN_SCORE,
            comment: FAILURE_COMMENT.to_string(),
            outcome: EvaluationOutcome::Failed,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn outcome(&self) -> EvaluationOutcome {
        self.outcome
    }

    pub fn is_failure(&self) -> bool {
        self.outcome == EvaluationOutcome::Failed
    }
}
