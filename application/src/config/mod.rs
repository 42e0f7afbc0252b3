//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`GameParams`]: round timing, board-load budget, topic defaults, money rules
//! - [`JudgeParams`]: judge models and credentials

pub mod game_params;
pub mod judge_params;

pub use game_params::GameParams;
pub use judge_params::JudgeParams;
