//! Application layer for ogiri-dice
//!
//! This crate contains the game orchestrator, use cases, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GameParams, JudgeParams};
pub use ports::{
    board_source::BoardSource,
    game_event::GameEvent,
    game_surface::{GameSurface, NoGameSurface},
    judge::{Judge, JudgeError},
    judge_endpoint::{EndpointError, EndpointResponse, JudgeEndpoint},
};
pub use use_cases::board_gate::BoardGate;
pub use use_cases::evaluate_answer::EvaluateAnswerUseCase;
pub use use_cases::judge_gateway::{GatewayError, JudgeGateway, is_rate_limited};
pub use use_cases::movement::MovementExecutor;
pub use use_cases::orchestrator::{GameCommand, GameOrchestrator};
