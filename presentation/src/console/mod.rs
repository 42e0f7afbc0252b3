//! Console front end: surface, event rendering, and line input

pub mod input;
pub mod presenter;
pub mod surface;

pub use input::{parse_command, spawn_stdin_reader};
pub use presenter::EventPresenter;
pub use surface::ConsoleSurface;
