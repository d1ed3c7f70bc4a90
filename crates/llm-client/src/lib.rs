//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait, the [`LlmError`] taxonomy every implementation reports
//! failures with, and [`WorkerLlmClient`], which posts `{"messages": [...]}` to a chat-completions
//! proxy endpoint. Transport-agnostic callers (advisor-session) depend only on the trait.

use async_trait::async_trait;
use prompt::ChatMessage;

mod config;
mod error;
mod worker;

pub use config::{EnvLlmConfig, LlmConfig, DEFAULT_ENDPOINT_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{LlmError, Result};
pub use worker::{parse_completion, WorkerLlmClient};

/// LLM client interface: request a completion for a list of messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the assistant reply text for `messages` (system/user/assistant, already assembled).
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}
