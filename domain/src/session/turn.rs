//! Turn order

use super::player::Player;

/// Rotates through a fixed list of players.
#[derive(Debug, Clone, Default)]
pub struct TurnSequencer {
    players: Vec<Player>,
    cursor: usize,
}

impl TurnSequencer {
    /// Seat `players` with the first one to play.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players, cursor: 0 }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.players.is_empty()).then_some(self.cursor)
    }

    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.cursor)
    }

    pub fn current_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.cursor)
    }

    /// Hand the turn to the next player, wrapping around. Returns `None`
    /// (and changes nothing) when nobody is seated.
    pub fn next_turn(&mut self) -> Option<&Player> {
        if self.players.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.players.len();
        self.players.get(self.cursor)
    }
}
