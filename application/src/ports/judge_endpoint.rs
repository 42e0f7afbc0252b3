//! Judge endpoint port
//!
//! A single request to the remote scorer. Retry and fallback policy live in
//! [`JudgeGateway`](crate::use_cases::judge_gateway::JudgeGateway); an
//! endpoint only reports what the wire said.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that prevented any HTTP response from arriving
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Raw HTTP-level reply from the judge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the judge service.
///
/// Dropping the returned future must abort the in-flight request; the
/// gateway relies on that for cancellation.
#[async_trait]
pub trait JudgeEndpoint: Send + Sync {
    /// POST `prompt` to `model` using `api_key`
    async fn send(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<EndpointResponse, EndpointError>;
}
