//! Game events emitted by the orchestrator for observers.
//!
//! These events form the output port from the application layer to the
//! presentation layer. A new subscriber first receives the current topic,
//! state, and player so it never has to poll.

use ogiri_domain::{
    BoardLoadError, CellEffect, CellType, EvaluationResult, GameState, NoTopicAvailable, Player,
    Topic,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // === Round ===
    /// The topic changed (`None` before the first successful pick)
    TopicChanged(Option<Topic>),
    /// A topic pick found nothing; the current topic is unchanged
    TopicUnavailable(NoTopicAvailable),
    /// Orchestrator state changed
    StateChanged(GameState),

    // === Countdown ===
    CountdownTick(Duration),
    CountdownTimeout,

    // === Evaluation ===
    EvaluationStarted { answer: String },
    EvaluationCompleted(EvaluationResult),
    /// The attempt was cancelled before a result arrived
    EvaluationCancelled,
    /// The attempt failed hard (e.g. missing credentials)
    EvaluationAborted { error: String },

    // === Players ===
    /// Turn passed to `player` (seat `index`)
    TurnChanged { index: usize, player: Player },
    /// Player moved one cell
    PlayerStepped(Player),
    /// Player finished a move or changed balance
    PlayerUpdated(Player),
    CellEffectApplied {
        player: Player,
        cell_type: CellType,
        effect: CellEffect,
    },
    GameOver { winner: Player },

    // === Board ===
    BoardReady { cells: usize },
    /// Movement is disabled for the rest of the session
    BoardUnavailable(BoardLoadError),
}
