//! Board model: an immutable, linear sequence of typed cells.

pub mod board;
pub mod cell;
pub mod load_state;
