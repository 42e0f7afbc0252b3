//! Judge gateway
//!
//! Sends a prompt to the primary model and, only when that attempt is
//! rate-limited, makes exactly one attempt against the fallback model.
//! Every attempt races the caller's [`CancellationToken`]; cancelling drops
//! the in-flight request.

use crate::config::JudgeParams;
use crate::ports::judge_endpoint::{EndpointResponse, JudgeEndpoint};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Body substrings (lowercase) that mark a rate-limit reply
pub const RATE_LIMIT_MARKERS: [&str; 3] = ["quotaexceeded", "resource_exhausted", "limitexceeded"];

const TOO_MANY_REQUESTS: u16 = 429;

/// Errors that can occur while obtaining a judge reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request to {model} failed: {message}")]
    RequestFailed { model: String, message: String },

    #[error("Operation cancelled")]
    Cancelled,
}

impl GatewayError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GatewayError::Cancelled)
    }
}

/// HTTP 429, or a body mentioning one of [`RATE_LIMIT_MARKERS`]
pub fn is_rate_limited(status: u16, body: &str) -> bool {
    if status == TOO_MANY_REQUESTS {
        return true;
    }
    let lowered = body.to_lowercase();
    RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Result of a single attempt that was not cancelled
enum Attempt {
    Success(String),
    Failed { rate_limited: bool, message: String },
}

pub struct JudgeGateway<E: JudgeEndpoint + 'static> {
    endpoint: Arc<E>,
    params: JudgeParams,
}

impl<E: JudgeEndpoint + 'static> JudgeGateway<E> {
    pub fn new(endpoint: Arc<E>, params: JudgeParams) -> Self {
        Self { endpoint, params }
    }

    pub fn params(&self) -> &JudgeParams {
        &self.params
    }

    /// Obtain the raw judge reply body for `prompt`.
    pub async fn generate(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String, GatewayError> {
        let api_key = self
            .params
            .api_key()
            .ok_or_else(|| GatewayError::Configuration("API key is not configured".to_string()))?;

        if prompt.trim().is_empty() {
            return Err(GatewayError::Configuration(
                "Prompt cannot be empty".to_string(),
            ));
        }

        let primary_model = &self.params.primary_model;
        let (rate_limited, primary_message) =
            match self.attempt(primary_model, api_key, prompt, cancel).await? {
                Attempt::Success(body) => return Ok(body),
                Attempt::Failed {
                    rate_limited,
                    message,
                } => (rate_limited, message),
            };

        if rate_limited && self.params.has_distinct_fallback() {
            let fallback_model = &self.params.fallback_model;
            info!(
                "Primary model {} is rate-limited, trying {}",
                primary_model, fallback_model
            );
            return match self.attempt(fallback_model, api_key, prompt, cancel).await? {
                Attempt::Success(body) => {
                    info!("Fallback model {} succeeded", fallback_model);
                    Ok(body)
                }
                Attempt::Failed { message, .. } => {
                    warn!(
                        "Both models failed. Primary error: {}, fallback error: {}",
                        primary_message, message
                    );
                    Err(GatewayError::RequestFailed {
                        model: fallback_model.clone(),
                        message,
                    })
                }
            };
        }

        warn!("Primary model {} failed: {}", primary_model, primary_message);
        Err(GatewayError::RequestFailed {
            model: primary_model.clone(),
            message: primary_message,
        })
    }

    async fn attempt(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<Attempt, GatewayError> {
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Request to {} cancelled", model);
                return Err(GatewayError::Cancelled);
            }
            response = self.endpoint.send(model, api_key, prompt) => response,
        };

        let attempt = match response {
            Ok(response) if response.is_success() => Attempt::Success(response.body),
            Ok(response) => Attempt::Failed {
                rate_limited: is_rate_limited(response.status, &response.body),
                message: error_message(&response),
            },
            Err(e) => Attempt::Failed {
                rate_limited: false,
                message: e.to_string(),
            },
        };

        debug!(
            "{} -> success={}, rate_limited={}",
            model,
            matches!(attempt, Attempt::Success(_)),
            matches!(
                attempt,
                Attempt::Failed {
                    rate_limited: true,
                    ..
                }
            )
        );
        Ok(attempt)
    }
}

/// `error.message` from a JSON error body, else the status line
fn error_message(response: &EndpointResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(|m| format!("HTTP {}: {}", response.status, m))
        })
        .unwrap_or_else(|| format!("HTTP {}", response.status))
}
