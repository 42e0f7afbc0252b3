//! Presentation layer for ogiri-dice
//!
//! This crate contains the CLI definition and the console front end:
//! a [`GameSurface`](ogiri_application::GameSurface) implementation,
//! event rendering, and stdin command input.

pub mod cli;
pub mod console;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::{ConsoleSurface, EventPresenter, parse_command, spawn_stdin_reader};
