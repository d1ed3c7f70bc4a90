//! advisor CLI: interactive chat or a single question against the advisor endpoint.
//! Config from env (`.env` supported) and optional CLI args.

use advisor_cli::{build_session, load_config, run_ask, run_chat, Cli, Commands, ConsoleRenderer};
use advisor_core::init_tracing;
use anyhow::Result;
use clap::Parser;
use llm_client::LlmConfig;
use std::sync::Arc;
use tokio::io::BufReader;

const DEFAULT_LOG_FILE: &str = "logs/advisor.log";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("LOG_FILE").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    init_tracing(&log_file)?;

    let config = load_config(cli.endpoint, cli.timeout_secs)?;
    tracing::info!(
        endpoint = %config.endpoint_url(),
        timeout_secs = config.request_timeout_secs,
        "Advisor config loaded"
    );

    let console = Arc::new(ConsoleRenderer::stdout(config.thinking_message()));
    let session = build_session(&config, console.clone())?;

    match cli.command {
        Commands::Chat => {
            run_chat(&session, &console, BufReader::new(tokio::io::stdin())).await
        }
        Commands::Ask { question } => {
            run_ask(&session, &question.join(" ")).await?;
            Ok(())
        }
    }
}
