//! Chat loop and one-shot question over a [`ConversationSession`].

use advisor_session::{ConversationSession, TurnOutcome};
use anyhow::{Context, Result};
use prompt::format_message_line;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::console::ConsoleRenderer;

const CMD_QUIT: &str = "/quit";
const CMD_EXIT: &str = "/exit";
const CMD_PROFILE: &str = "/profile";
const CMD_HISTORY: &str = "/history";

/// Runs the interactive chat until `/quit`, `/exit` or end of input.
///
/// Lines starting with `/` are commands: `/profile` prints the learned profile as JSON and
/// `/history` prints the stored turns. Anything else is a turn.
pub async fn run_chat<R>(
    session: &ConversationSession,
    console: &ConsoleRenderer,
    input: R,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    session.start().await;
    let mut lines = input.lines();
    let mut turns = 0usize;

    while let Some(line) = lines.next_line().await.context("Read from stdin")? {
        match line.trim() {
            CMD_QUIT | CMD_EXIT => break,
            CMD_PROFILE => {
                let profile = session.profile().await;
                console.print_line(&serde_json::to_string_pretty(&profile)?)?;
            }
            CMD_HISTORY => {
                let history = session.history().await;
                if history.is_empty() {
                    console.print_line("(no history)")?;
                }
                for message in history.messages() {
                    console.print_line(&format_message_line(message))?;
                }
            }
            _ => {
                if let TurnOutcome::Replied(_) | TurnOutcome::Failed { .. } =
                    session.handle_turn(&line).await
                {
                    turns += 1;
                }
            }
        }
    }

    info!(turns, "Chat ended");
    Ok(())
}

/// Asks a single question. Fails when the turn did not produce a reply.
pub async fn run_ask(session: &ConversationSession, question: &str) -> Result<String> {
    match session.handle_turn(question).await {
        TurnOutcome::Replied(reply) => Ok(reply),
        TurnOutcome::Failed { error, .. } => Err(error).context("Request failed"),
        TurnOutcome::Ignored => anyhow::bail!("Question is empty"),
        TurnOutcome::Busy => anyhow::bail!("Another question is still in progress"),
    }
}
