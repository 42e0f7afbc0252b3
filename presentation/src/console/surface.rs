//! Console implementation of the game surface

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ogiri_application::GameSurface;
use ogiri_domain::EvaluationResult;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Drives a spinner while the judge thinks and prints results inline.
pub struct ConsoleSurface {
    spinner: Mutex<Option<ProgressBar>>,
    input_enabled: AtomicBool,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            input_enabled: AtomicBool::new(false),
        }
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled.load(Ordering::SeqCst)
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Result panel text
    pub fn format_result(result: &EvaluationResult, is_failure: bool) -> String {
        if is_failure {
            return format!(
                "{} {}\n  {}",
                "x".red(),
                result.comment().red(),
                "Type :retry to ask the judge again, or :next for a new topic.".dimmed()
            );
        }
        let pips = "●".repeat(result.score() as usize);
        format!(
            "{} {} {}\n  \"{}\"\n  {}",
            "Judge:".cyan().bold(),
            pips.yellow(),
            format!("{}/6", result.score()).bold(),
            result.comment(),
            "Type :next for the next topic.".dimmed()
        )
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSurface for ConsoleSurface {
    fn set_input_enabled(&self, enabled: bool) {
        self.input_enabled.store(enabled, Ordering::SeqCst);
    }

    fn show_loading(&self) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if spinner.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("The judge is thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *spinner = Some(pb);
    }

    fn hide_loading(&self) {
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
        }
    }

    fn show_result(&self, result: &EvaluationResult, is_failure: bool) {
        println!("{}", Self::format_result(result, is_failure));
    }

    fn hide_result(&self) {}

    fn clear_answer(&self) {}
}
