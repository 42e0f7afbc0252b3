//! Topic and board data loaders
//!
//! Both formats are JSON. When no path is configured the copies bundled
//! into the binary are used.

pub mod board;
pub mod topics;

pub use board::{JsonBoardSource, parse_board};
pub use topics::{TopicLoadError, load_topics, parse_topics};
