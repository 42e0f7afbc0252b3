//! Per-session game entities: players, turn order, the round countdown, and
//! the orchestration state.

pub mod countdown;
pub mod player;
pub mod state;
pub mod turn;
