//! Gemini `generateContent` endpoint
//!
//! Implements [`JudgeEndpoint`] over HTTP. The request asks for a JSON
//! response; the body is handed back untouched for the decoder.

use async_trait::async_trait;
use ogiri_application::{EndpointError, EndpointResponse, JudgeEndpoint};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_RESPONSE_MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str, response_mime_type: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig { response_mime_type },
        }
    }
}

pub struct GeminiEndpoint {
    client: reqwest::Client,
    base_url: String,
    response_mime_type: String,
}

impl GeminiEndpoint {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            response_mime_type: DEFAULT_RESPONSE_MIME_TYPE.to_string(),
        }
    }

    /// Endpoint with a per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, EndpointError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EndpointError::Other(e.to_string()))?;
        Ok(Self {
            client,
            ..Self::new()
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_response_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.response_mime_type = mime.into();
        self
    }

    fn url(&self, model: &str, api_key: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            api_key
        )
    }
}

impl Default for GeminiEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(e: reqwest::Error) -> EndpointError {
    if e.is_timeout() {
        EndpointError::Timeout
    } else if e.is_connect() {
        EndpointError::ConnectionError(e.without_url().to_string())
    } else {
        // The URL carries the API key
        EndpointError::Other(e.without_url().to_string())
    }
}

#[async_trait]
impl JudgeEndpoint for GeminiEndpoint {
    async fn send(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<EndpointResponse, EndpointError> {
        let payload = GenerateContentRequest::new(prompt, &self.response_mime_type);
        debug!("POST {}/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(self.url(model, api_key))
            .json(&payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        debug!("{} replied HTTP {} ({} bytes)", model, status, body.len());

        Ok(EndpointResponse::new(status, body))
    }
}
