//! Game rules: how far a score moves a player, and what the landing cell does.

pub mod cell_effect;
pub mod movement;
