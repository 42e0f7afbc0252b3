//! Use cases (application services)
//!
//! - [`judge_gateway`]: one judge call with a single rate-limit fallback
//! - [`evaluate_answer`]: prompt, call, decode
//! - [`movement`]: paced, bounds-checked player movement
//! - [`board_gate`]: waits (bounded) for asynchronous board data
//! - [`orchestrator`]: the round state machine tying it all together

pub mod board_gate;
pub mod evaluate_answer;
pub mod judge_gateway;
pub mod movement;
pub mod orchestrator;
