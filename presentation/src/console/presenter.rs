//! Renders [`GameEvent`]s as console lines

use colored::Colorize;
use ogiri_application::GameEvent;
use ogiri_domain::{CellEffect, GameState};
use tokio::sync::mpsc;

/// Turns game events into printable lines. Countdown ticks are thinned to
/// whole seconds (every fifth, then each of the last five).
#[derive(Default)]
pub struct EventPresenter {
    last_second: Option<u64>,
}

impl EventPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, event: &GameEvent) -> Option<String> {
        match event {
            GameEvent::TopicChanged(Some(topic)) => Some(format!(
                "\n{} {} {}\n  {}",
                "Topic".cyan().bold(),
                format!("[{}]", topic.category).dimmed(),
                topic.difficulty.to_string().dimmed(),
                topic.prompt.bold()
            )),
            GameEvent::TopicChanged(None) => None,
            GameEvent::TopicUnavailable(e) => Some(format!("{} {}", "!".yellow(), e)),
            GameEvent::StateChanged(GameState::AwaitingInput) => {
                self.last_second = None;
                Some(format!("{}", "Your answer:".green()))
            }
            GameEvent::StateChanged(_) => None,
            GameEvent::CountdownTick(remaining) => {
                let second = remaining.as_secs_f64().ceil() as u64;
                if second == 0 || self.last_second == Some(second) {
                    return None;
                }
                self.last_second = Some(second);
                (second <= 5 || second % 5 == 0)
                    .then(|| format!("  {}s", second).dimmed().to_string())
            }
            GameEvent::CountdownTimeout => Some(format!("{}", "Time's up!".red().bold())),
            GameEvent::EvaluationStarted { answer } if answer.is_empty() => {
                Some(format!("{}", "(no answer)".dimmed()))
            }
            GameEvent::EvaluationStarted { .. } => None,
            GameEvent::EvaluationCompleted(_) => None,
            GameEvent::EvaluationCancelled => Some(format!("{}", "Evaluation cancelled.".yellow())),
            GameEvent::EvaluationAborted { error } => {
                Some(format!("{} {}", "Evaluation aborted:".red().bold(), error))
            }
            GameEvent::TurnChanged { player, .. } => Some(format!(
                "{} {}'s turn",
                ">>".magenta().bold(),
                player.name().bold()
            )),
            GameEvent::PlayerStepped(player) => {
                Some(format!("  {} cell {}", "step".dimmed(), player.position()))
            }
            GameEvent::PlayerUpdated(_) => None,
            GameEvent::CellEffectApplied { player, effect, .. } => match effect {
                CellEffect::None => None,
                CellEffect::Bonus { amount, .. } => Some(format!(
                    "{} {} earns {} (now {})",
                    "Blue!".blue().bold(),
                    player.name(),
                    amount,
                    player.money()
                )),
                CellEffect::Penalty { target, amount: 0 } => Some(format!(
                    "{} target {} met, no penalty",
                    "Red!".red().bold(),
                    target
                )),
                CellEffect::Penalty { target, amount } => Some(format!(
                    "{} target was {}; {} pays {} (now {})",
                    "Red!".red().bold(),
                    target,
                    player.name(),
                    amount,
                    player.money()
                )),
            },
            GameEvent::GameOver { winner } => Some(format!(
                "\n{} {} wins with {}!\n{}",
                "GAME OVER".green().bold(),
                winner.name().bold(),
                winner.money(),
                "Type :quit to leave.".dimmed()
            )),
            GameEvent::BoardReady { cells } => {
                Some(format!("{}", format!("Board ready: {} cells", cells).dimmed()))
            }
            GameEvent::BoardUnavailable(e) => Some(format!(
                "{} {} (movement disabled)",
                "Board unavailable:".yellow().bold(),
                e
            )),
        }
    }

    /// Print events until the orchestrator goes away.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<GameEvent>) {
        while let Some(event) = events.recv().await {
            if let Some(line) = self.render(&event) {
                println!("{}", line);
            }
        }
    }
}
