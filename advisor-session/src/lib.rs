//! # advisor-session
//!
//! [`ConversationSession`] owns the user profile and conversation history of one chat and runs
//! each turn: build context, call the [`llm_client::LlmClient`], extract facts, append history,
//! render through [`advisor_core::Renderer`]. Every failure ends as a rendered message.

mod messages;
mod session;

pub use messages::{
    user_message, GREETING, MSG_API_ERROR_FALLBACK, MSG_CONNECTION_PREFIX, MSG_UNEXPECTED_RESPONSE,
};
pub use session::{ConversationSession, TurnOutcome};
