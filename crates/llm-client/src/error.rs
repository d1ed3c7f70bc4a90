//! Failure taxonomy for a completion request.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Could not reach the endpoint (DNS, connect, reset, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Body is not valid JSON.
    #[error("Failed to parse response: {0}")]
    PayloadParse(String),

    /// Payload carries an explicit `error` object; holds its message when one is given.
    #[error("API error: {}", .0.as_deref().unwrap_or("Unknown error"))]
    Api(Option<String>),

    /// Payload is JSON but has neither `choices[0].message.content` nor `error`.
    #[error("Unexpected response format")]
    UnexpectedShape,
}

impl LlmError {
    /// True for failures of the transport itself (network or HTTP status), as opposed to payload problems.
    pub fn is_transport(&self) -> bool {
        matches!(self, LlmError::Network(_) | LlmError::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LlmError>;
