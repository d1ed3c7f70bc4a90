//! User-facing text: greeting and the message shown for each failure kind.

use llm_client::LlmError;

/// Shown when the session starts.
pub const GREETING: &str = "👋 Hello! How can I help you with L'Oréal products today?";

// --- User-facing fallback messages (rendered in place of a reply) ---

/// Prefix shared by every transport-level failure message.
pub const MSG_CONNECTION_PREFIX: &str = "Sorry, there was an error connecting to the service. ";
const MSG_CHECK_CONNECTION: &str = "Please check your internet connection and try again.";
const MSG_RETRY_LATER: &str = "Please try again in a moment.";
const MSG_PROCESSING: &str = "There was an issue processing the response. Please try again.";
const MSG_TIMED_OUT: &str = "The request timed out. Please try again.";
/// Used when an API error carries no message.
pub const MSG_API_ERROR_FALLBACK: &str = "Unknown error";
pub const MSG_UNEXPECTED_RESPONSE: &str =
    "Sorry, I received an unexpected response. Please try rephrasing your question.";

/// Maps a failed completion to the text rendered as the assistant's side of the exchange.
pub fn user_message(error: &LlmError) -> String {
    match error {
        LlmError::Network(_) => format!("{}{}", MSG_CONNECTION_PREFIX, MSG_CHECK_CONNECTION),
        LlmError::HttpStatus { .. } => format!("{}{}", MSG_CONNECTION_PREFIX, MSG_RETRY_LATER),
        LlmError::PayloadParse(_) => format!("{}{}", MSG_CONNECTION_PREFIX, MSG_PROCESSING),
        LlmError::Timeout => format!("{}{}", MSG_CONNECTION_PREFIX, MSG_TIMED_OUT),
        LlmError::Api(message) => format!(
            "Sorry, there was an issue: {}. Please try again.",
            message.as_deref().unwrap_or(MSG_API_ERROR_FALLBACK)
        ),
        LlmError::UnexpectedShape => MSG_UNEXPECTED_RESPONSE.to_string(),
    }
}
