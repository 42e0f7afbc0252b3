//! Player entity

use serde::{Deserialize, Serialize};

/// A seated player: position on the board and money balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: usize,
    money: i64,
}

impl Player {
    pub const DEFAULT_NAME: &'static str = "Player";
    pub const INITIAL_MONEY: i64 = 10_000;

    pub fn new(name: impl Into<String>) -> Self {
        Self::with_money(name, Self::INITIAL_MONEY)
    }

    /// Blank names fall back to [`Player::DEFAULT_NAME`].
    pub fn with_money(name: impl Into<String>, money: i64) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            Self::DEFAULT_NAME.to_string()
        } else {
            name.trim().to_string()
        };
        Self {
            name,
            position: 0,
            money,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn move_to(&mut self, position: usize) {
        self.position = position;
    }

    pub fn add_money(&mut self, delta: i64) {
        self.money = self.money.saturating_add(delta);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: position={}, money={}",
            self.name, self.position, self.money
        )
    }
}
