//! Orchestration state

use serde::{Deserialize, Serialize};

/// Where the round currently is.
///
/// Input is accepted and the countdown runs only in
/// [`GameState::AwaitingInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    AwaitingInput,
    Evaluating,
    ShowingResult,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::AwaitingInput => "awaiting_input",
            GameState::Evaluating => "evaluating",
            GameState::ShowingResult => "showing_result",
        }
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self, GameState::AwaitingInput)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
