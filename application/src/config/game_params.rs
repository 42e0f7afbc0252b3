//! Game parameters: orchestrator timing and rules.

use ogiri_domain::{CellEffectRules, Difficulty};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Static parameters for one game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameParams {
    /// Answer time per round.
    pub countdown: Duration,
    /// How often the countdown is advanced.
    pub frame_interval: Duration,
    /// Pause between single-cell steps while moving.
    pub move_interval: Duration,
    /// How long movement waits for board data before giving up for the session.
    pub board_load_timeout: Duration,
    /// Category used when a topic pick does not name one.
    pub default_category: String,
    /// Difficulty used when a topic pick does not name one.
    pub default_difficulty: Difficulty,
    /// Money rules for landing cells.
    pub cell_rules: CellEffectRules,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            countdown: Duration::from_secs(15),
            frame_interval: Duration::from_millis(100),
            move_interval: Duration::from_millis(100),
            board_load_timeout: Duration::from_secs(10),
            default_category: "I'd hate a ___ like this".to_string(),
            default_difficulty: Difficulty::Normal,
            cell_rules: CellEffectRules::default(),
        }
    }
}

impl GameParams {
    // ==================== Builder Methods ====================

    pub fn with_countdown(mut self, countdown: Duration) -> Self {
        self.countdown = countdown;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_move_interval(mut self, interval: Duration) -> Self {
        self.move_interval = interval;
        self
    }

    pub fn with_board_load_timeout(mut self, timeout: Duration) -> Self {
        self.board_load_timeout = timeout;
        self
    }

    pub fn with_default_topic(
        mut self,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        self.default_category = category.into();
        self.default_difficulty = difficulty;
        self
    }

    pub fn with_cell_rules(mut self, rules: CellEffectRules) -> Self {
        self.cell_rules = rules;
        self
    }
}
