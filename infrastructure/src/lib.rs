//! Infrastructure layer for ogiri-dice
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP judge endpoint, topic and board
//! loaders, and configuration file loading.

pub mod assets;
pub mod config;
pub mod judge;

// Re-export commonly used types
pub use assets::{JsonBoardSource, TopicLoadError, load_topics, parse_board, parse_topics};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAssetsConfig, FileConfig, FileGameConfig,
    FileJudgeConfig, FileLoggingConfig,
};
pub use judge::GeminiEndpoint;
