//! Configuration file loading for ogiri-dice
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `OGIRI_*` environment variables (`OGIRI_GAME__COUNTDOWN_SECONDS=20`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./ogiri.toml` or `./.ogiri.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ogiri-dice/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAssetsConfig, FileConfig, FileGameConfig, FileJudgeConfig,
    FileLoggingConfig,
};
pub use loader::ConfigLoader;
