//! Domain layer for ogiri-dice
//!
//! This crate contains the core game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round
//!
//! Each round a [`Topic`] is shown, the current player answers it, and an
//! external judge scores the answer on a 1-6 scale. The score is the number
//! of cells the player moves along the [`Board`].
//!
//! ## Cells
//!
//! - **Blue**: the player earns `score × 100`; reaching the win threshold ends the game
//! - **Red**: a hidden target 1-4 is drawn; scoring below it costs money
//! - **Normal**: nothing happens

pub mod board;
pub mod core;
pub mod evaluation;
pub mod rules;
pub mod session;
pub mod topic;

// Re-export commonly used types
pub use board::{
    board::Board,
    cell::{BoardCell, CellType},
    load_state::{BoardLoadError, BoardLoadState},
};
pub use core::{
    error::DomainError,
    rng::{GameRng, ThreadGameRng},
};
pub use evaluation::{
    parsing::decode_judge_response,
    prompt::JudgePromptTemplate,
    result::{
        EvaluationOutcome, EvaluationResult, FAILURE_COMMENT, MAX_SCORE, MIN_SCORE, clamp_score,
    },
};
pub use rules::{
    cell_effect::{CellEffect, CellEffectRules, apply_cell_effect},
    movement::{MoveOutcome, movement_steps, plan_path},
};
pub use session::{
    countdown::{Countdown, CountdownSignal},
    player::Player,
    state::GameState,
    turn::TurnSequencer,
};
pub use topic::{
    catalog::{NoTopicAvailable, TopicCatalog},
    topic::{Difficulty, Topic},
};
