//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default, so an empty file (or none at all) is valid.

use ogiri_application::{GameParams, JudgeParams};
use ogiri_domain::{CellEffectRules, Difficulty};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("game.countdown_seconds cannot be 0")]
    ZeroCountdown,

    #[error("game.board_load_timeout_seconds cannot be 0")]
    ZeroBoardTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("unknown difficulty '{0}' (expected easy, normal or hard)")]
    InvalidDifficulty(String),

    #[error("red target range {min}..={max} is empty")]
    InvalidRedTargetRange { min: i64, max: i64 },
}

/// Raw judge configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJudgeConfig {
    pub primary_model: String,
    /// Used once when the primary model is rate-limited
    pub fallback_model: String,
    /// Environment variable consulted first for the API key
    pub api_key_env: String,
    /// Fallback API key (prefer the environment)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub response_mime_type: String,
    /// HTTP timeout per request
    pub timeout_seconds: Option<u64>,
}

impl Default for FileJudgeConfig {
    fn default() -> Self {
        let judge = JudgeParams::default();
        Self {
            primary_model: judge.primary_model,
            fallback_model: judge.fallback_model,
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            response_mime_type: "application/json".to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileJudgeConfig {
    /// API key from `lookup(api_key_env)` if set and non-blank, else the
    /// configured one.
    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup(&self.api_key_env)
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    pub countdown_seconds: u64,
    pub move_interval_ms: u64,
    pub frame_interval_ms: u64,
    pub board_load_timeout_seconds: u64,
    pub default_category: String,
    pub default_difficulty: String,
    pub initial_money: i64,
    pub win_threshold: i64,
    pub blue_multiplier: i64,
    pub red_penalty_unit: i64,
    pub red_target_min: i64,
    pub red_target_max: i64,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        let game = GameParams::default();
        let rules = game.cell_rules;
        Self {
            countdown_seconds: game.countdown.as_secs(),
            move_interval_ms: game.move_interval.as_millis() as u64,
            frame_interval_ms: game.frame_interval.as_millis() as u64,
            board_load_timeout_seconds: game.board_load_timeout.as_secs(),
            default_category: game.default_category,
            default_difficulty: game.default_difficulty.as_str().to_lowercase(),
            initial_money: ogiri_domain::Player::INITIAL_MONEY,
            win_threshold: rules.win_threshold,
            blue_multiplier: rules.blue_multiplier,
            red_penalty_unit: rules.red_penalty_unit,
            red_target_min: rules.red_target_min,
            red_target_max: rules.red_target_max,
        }
    }
}

/// Raw asset locations from TOML. Unset paths use the bundled data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssetsConfig {
    pub topics: Option<PathBuf>,
    pub board: Option<PathBuf>,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the rolling log file (default: platform data dir)
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "ogiri-dice.log".to_string(),
        }
    }
}

impl FileLoggingConfig {
    /// Configured directory, else `<data dir>/ogiri-dice/logs`
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("ogiri-dice")
                .join("logs")
        })
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub judge: FileJudgeConfig,
    pub game: FileGameConfig,
    pub assets: FileAssetsConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.game.countdown_seconds == 0 {
            return Err(ConfigValidationError::ZeroCountdown);
        }
        if self.game.board_load_timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroBoardTimeout);
        }
        if self.judge.primary_model.trim().is_empty() || self.judge.fallback_model.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName);
        }
        self.difficulty()?;
        if self.game.red_target_min > self.game.red_target_max {
            return Err(ConfigValidationError::InvalidRedTargetRange {
                min: self.game.red_target_min,
                max: self.game.red_target_max,
            });
        }
        Ok(())
    }

    fn difficulty(&self) -> Result<Difficulty, ConfigValidationError> {
        self.game
            .default_difficulty
            .parse()
            .map_err(|_| {
                ConfigValidationError::InvalidDifficulty(self.game.default_difficulty.clone())
            })
    }

    /// Game parameters for the orchestrator
    pub fn to_game_params(&self) -> Result<GameParams, ConfigValidationError> {
        self.validate()?;
        let game = &self.game;
        Ok(GameParams::default()
            .with_countdown(Duration::from_secs(game.countdown_seconds))
            .with_move_interval(Duration::from_millis(game.move_interval_ms))
            .with_frame_interval(Duration::from_millis(game.frame_interval_ms.max(1)))
            .with_board_load_timeout(Duration::from_secs(game.board_load_timeout_seconds))
            .with_default_topic(game.default_category.clone(), self.difficulty()?)
            .with_cell_rules(CellEffectRules {
                blue_multiplier: game.blue_multiplier,
                win_threshold: game.win_threshold,
                red_penalty_unit: game.red_penalty_unit,
                red_target_min: game.red_target_min,
                red_target_max: game.red_target_max,
            }))
    }

    /// Judge parameters, with the API key resolved through `lookup`
    /// (normally `std::env::var`).
    pub fn to_judge_params(&self, lookup: impl Fn(&str) -> Option<String>) -> JudgeParams {
        let params = JudgeParams::default()
            .with_models(&self.judge.primary_model, &self.judge.fallback_model);
        match self.judge.resolve_api_key(lookup) {
            Some(key) => params.with_api_key(key),
            None => params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[judge]
primary_model = "gemini-2.0-pro"
fallback_model = "gemini-2.0-flash"
api_key = "file-key"
timeout_seconds = 30

[game]
countdown_seconds = 20
move_interval_ms = 50
default_category = "Office"
default_difficulty = "HARD"
win_threshold = 50000

[assets]
topics = "data/topics.json"

[logging]
directory = "/tmp/ogiri"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.judge.primary_model, "gemini-2.0-pro");
        assert_eq!(config.judge.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.game.countdown_seconds, 20);
        assert_eq!(config.game.board_load_timeout_seconds, 10);
        assert_eq!(config.assets.topics, Some(PathBuf::from("data/topics.json")));
        assert!(config.assets.board.is_none());
        assert_eq!(
            config.logging.resolved_directory(),
            PathBuf::from("/tmp/ogiri")
        );

        let game = config.to_game_params().unwrap();
        assert_eq!(game.countdown, Duration::from_secs(20));
        assert_eq!(game.move_interval, Duration::from_millis(50));
        assert_eq!(game.default_category, "Office");
        assert_eq!(game.default_difficulty, Difficulty::Hard);
        assert_eq!(game.cell_rules.win_threshold, 50_000);
        assert_eq!(game.cell_rules.blue_multiplier, 100);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.judge.primary_model, "gemini-1.5-pro");
        assert_eq!(config.judge.fallback_model, "gemini-1.5-flash");
        assert_eq!(config.judge.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.game.countdown_seconds, 15);
        assert_eq!(config.game.move_interval_ms, 100);
        assert_eq!(config.game.initial_money, 10_000);
        assert_eq!(config.game.red_penalty_unit, 10_000);
        assert_eq!(config.game.default_difficulty, "normal");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.game.countdown_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroCountdown));

        let mut config = FileConfig::default();
        config.game.board_load_timeout_seconds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroBoardTimeout)
        );

        let mut config = FileConfig::default();
        config.judge.fallback_model = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        let mut config = FileConfig::default();
        config.game.default_difficulty = "brutal".to_string();
        assert!(matches!(
            config.to_game_params(),
            Err(ConfigValidationError::InvalidDifficulty(d)) if d == "brutal"
        ));

        let mut config = FileConfig::default();
        config.game.red_target_min = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidRedTargetRange { min: 5, max: 4 })
        ));
    }

    #[test]
    fn test_env_key_wins_over_file_key() {
        let mut config = FileConfig::default();
        config.judge.api_key = Some("file-key".to_string());

        let params = config.to_judge_params(|name| {
            (name == "GEMINI_API_KEY").then(|| "env-key".to_string())
        });
        assert_eq!(params.api_key(), Some("env-key"));

        let params = config.to_judge_params(no_env);
        assert_eq!(params.api_key(), Some("file-key"));
    }

    #[test]
    fn test_blank_env_key_falls_back() {
        let mut config = FileConfig::default();
        config.judge.api_key = Some("file-key".to_string());
        config.judge.api_key_env = "MY_KEY".to_string();

        let key = config
            .judge
            .resolve_api_key(|name| (name == "MY_KEY").then(|| "   ".to_string()));
        assert_eq!(key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_missing_key_is_not_an_error() {
        let params = FileConfig::default().to_judge_params(no_env);
        assert!(params.api_key().is_none());
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let mut config = FileConfig::default();
        config.judge.api_key = Some("secret".to_string());
        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("secret"));
    }
}
