//! Judge parameters: which models to ask and with what credentials.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeParams {
    /// Model asked first.
    pub primary_model: String,
    /// Model asked once when the primary is rate-limited.
    pub fallback_model: String,
    /// Resolved API key; `None` surfaces as a configuration error on use.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for JudgeParams {
    fn default() -> Self {
        Self {
            primary_model: "gemini-1.5-pro".to_string(),
            fallback_model: "gemini-1.5-flash".to_string(),
            api_key: None,
        }
    }
}

impl JudgeParams {
    pub fn with_models(mut self, primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        self.primary_model = primary.into();
        self.fallback_model = fallback.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// The configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Whether a distinct fallback model exists (names compare case-insensitively)
    pub fn has_distinct_fallback(&self) -> bool {
        !self.primary_model.eq_ignore_ascii_case(&self.fallback_model)
    }
}
