//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Chat-completions proxy the advisor talks to when nothing else is configured.
pub const DEFAULT_ENDPOINT_URL: &str = "https://loreal-worker.mxr5784.workers.dev/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// LLM configuration interface for the worker endpoint.
pub trait LlmConfig: Send + Sync {
    fn endpoint_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn thinking_message(&self) -> &str;
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub endpoint_url: String,
    pub request_timeout_secs: u64,
    pub thinking_message: String,
    pub system_prompt: Option<String>,
}

impl Default for EnvLlmConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            thinking_message: "Thinking...".to_string(),
            system_prompt: None,
        }
    }
}

impl LlmConfig for EnvLlmConfig {
    fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
    fn thinking_message(&self) -> &str {
        &self.thinking_message
    }
    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from environment variables; every variable is optional.
    ///
    /// `ADVISOR_ENDPOINT_URL`, `REQUEST_TIMEOUT_SECS`, `THINKING_MESSAGE`,
    /// `ADVISOR_SYSTEM_PROMPT` (or `SYSTEM_PROMPT`; blank values are ignored).
    pub fn from_env() -> Result<Self> {
        let endpoint_url = env::var("ADVISOR_ENDPOINT_URL")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string());
        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let thinking_message =
            env::var("THINKING_MESSAGE").unwrap_or_else(|_| "Thinking...".to_string());
        let system_prompt = env::var("ADVISOR_SYSTEM_PROMPT")
            .or_else(|_| env::var("SYSTEM_PROMPT"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        let config = Self {
            endpoint_url,
            request_timeout_secs,
            thinking_message,
            system_prompt,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config: endpoint must be an http(s) URL, timeout must be positive.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint_url).with_context(|| {
            format!("ADVISOR_ENDPOINT_URL is not a valid URL: {}", self.endpoint_url)
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "ADVISOR_ENDPOINT_URL must use http or https: {}",
                self.endpoint_url
            );
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}
