//! CLI parser, config loading and session assembly.

use advisor_core::Renderer;
use advisor_session::ConversationSession;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use llm_client::{EnvLlmConfig, LlmConfig, WorkerLlmClient};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "advisor")]
#[command(about = "L'Oréal beauty advisor chat: interactive chat or a single question", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Endpoint URL (overrides ADVISOR_ENDPOINT_URL).
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds (overrides REQUEST_TIMEOUT_SECS).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
    /// Log file path (overrides LOG_FILE).
    #[arg(long, global = true)]
    pub log_file: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat on stdin; /profile, /history, /quit.
    Chat,
    /// Ask a single question and print the exchange.
    Ask {
        /// Question words (joined with spaces).
        #[arg(required = true)]
        question: Vec<String>,
    },
}

/// Load LLM config from environment, then apply CLI overrides and re-validate.
pub fn load_config(endpoint: Option<String>, timeout_secs: Option<u64>) -> Result<EnvLlmConfig> {
    let mut config = EnvLlmConfig::from_env().context("Load LLM config from environment")?;
    if let Some(url) = endpoint {
        config.endpoint_url = url;
    }
    if let Some(secs) = timeout_secs {
        config.request_timeout_secs = secs;
    }
    config.validate()?;
    Ok(config)
}

/// Builds a session talking to the configured endpoint and drawing through `renderer`.
pub fn build_session(
    config: &EnvLlmConfig,
    renderer: Arc<dyn Renderer>,
) -> Result<ConversationSession> {
    let client = WorkerLlmClient::from_config(config).context("Create endpoint client")?;
    let mut session = ConversationSession::new(Arc::new(client), renderer)
        .with_thinking_message(config.thinking_message());
    if let Some(prompt) = config.system_prompt() {
        session = session.with_system_prompt(prompt);
    }
    Ok(session)
}
