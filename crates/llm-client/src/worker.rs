//! HTTP implementation of [`LlmClient`]: posts the message list to a chat-completions proxy.

use async_trait::async_trait;
use prompt::ChatMessage;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::LlmConfig;
use crate::error::{LlmError, Result};
use crate::LlmClient;

/// Maximum body length kept in errors and logs.
const MAX_ERROR_BODY_LEN: usize = 500;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
}

/// Posts `{"messages": [...]}` as JSON to a fixed endpoint and reads back
/// `choices[0].message.content`.
#[derive(Debug, Clone)]
pub struct WorkerLlmClient {
    client: Client,
    endpoint_url: String,
}

impl WorkerLlmClient {
    /// Builds a client for `endpoint_url`; every request is bounded by `timeout`.
    pub fn new(endpoint_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    /// Builds a client from an [`LlmConfig`].
    pub fn from_config(config: &dyn LlmConfig) -> Result<Self> {
        Self::new(config.endpoint_url(), config.request_timeout())
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl LlmClient for WorkerLlmClient {
    #[instrument(skip(self, messages), fields(endpoint = %self.endpoint_url))]
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        info!(message_count = messages.len(), "Worker completion request");

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&CompletionRequest { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: a body that fails to arrive still reports the status.
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                "Worker completion returned non-success status"
            );
            return Err(LlmError::HttpStatus {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN),
            });
        }

        let body = response.text().await?;
        let reply = parse_completion(&body)?;
        info!(reply_len = reply.len(), "Worker completion response");
        Ok(reply)
    }
}

/// Extracts the assistant reply from a completion payload.
///
/// `choices[0].message.content` wins when it is a string; otherwise an `error` member yields
/// [`LlmError::Api`] (with `error.message` when it is a non-empty string); any other JSON is
/// [`LlmError::UnexpectedShape`]. Non-JSON bodies are [`LlmError::PayloadParse`].
pub fn parse_completion(body: &str) -> Result<String> {
    let payload: Value =
        serde_json::from_str(body).map_err(|e| LlmError::PayloadParse(e.to_string()))?;

    if let Some(content) = payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
    {
        return Ok(content.to_string());
    }

    match payload.get("error") {
        Some(error) if !error.is_null() => {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            Err(LlmError::Api(message))
        }
        _ => Err(LlmError::UnexpectedShape),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}
