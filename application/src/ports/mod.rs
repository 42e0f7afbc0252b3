//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod board_source;
pub mod game_event;
pub mod game_surface;
pub mod judge;
pub mod judge_endpoint;
