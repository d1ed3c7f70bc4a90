//! # Prompt
//!
//! Message types and the formatting that turns known user facts and recent history into the
//! `messages` array sent to the model endpoint.
//!
//! ## Format
//!
//! - **System**: the advisor instruction
//! - **User context** (optional, system role): `User context: Name: ... Skin type: ... Preferences: ... Previous recommendations: ...`
//! - **Recent history**: prior user/assistant turns, roles preserved
//! - **Current question**: last message, user role
//!
//! ## External interactions
//!
//! - **Model endpoint**: [`ChatMessage`] serialises one-to-one with an element of the request's `messages` array.

use serde::{Deserialize, Serialize};

/// Role of a message, one-to-one with Chat Completions `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message (a turn), one-to-one with one element of the `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Default system instruction for the advisor.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful L'Oréal virtual assistant. Only answer questions related to L'Oréal products (makeup, skincare, haircare, fragrances), beauty routines, and recommendations. Politely decline unrelated topics. Remember user details like their name, skin type, preferences, and previous recommendations to provide personalized advice.";

/// Prefix of the derived user-context system message.
pub const USER_CONTEXT_PREFIX: &str = "User context: ";

/// Number of most recent preferences included in the user context.
pub const CONTEXT_PREFERENCES_LIMIT: usize = 3;

/// Number of most recent recommendations included in the user context.
pub const CONTEXT_RECOMMENDATIONS_LIMIT: usize = 2;

fn last_n<S: AsRef<str>>(items: &[S], n: usize) -> Vec<&str> {
    items[items.len().saturating_sub(n)..]
        .iter()
        .map(|s| s.as_ref())
        .collect()
}

/// Formats the user-context summary, or `None` when nothing triggers it.
///
/// The summary is produced only if `name`, `skin_type` or `preferences` is present.
/// Recommendations are included when the summary exists but never trigger it on their own.
/// Each present clause ends with ". " except the recommendations clause, which has no
/// trailing period.
///
/// # Arguments
///
/// * `name` - Declared user name
/// * `skin_type` - Declared skin type (already lowercase)
/// * `preferences` - All stored preference utterances; only the last 3 are used
/// * `recommendations` - All stored recommendation replies; only the last 2 are used
pub fn format_user_context<P, R>(
    name: Option<&str>,
    skin_type: Option<&str>,
    preferences: &[P],
    recommendations: &[R],
) -> Option<String>
where
    P: AsRef<str>,
    R: AsRef<str>,
{
    if name.is_none() && skin_type.is_none() && preferences.is_empty() {
        return None;
    }

    let mut out = String::from(USER_CONTEXT_PREFIX);
    if let Some(name) = name {
        out.push_str("Name: ");
        out.push_str(name);
        out.push_str(". ");
    }
    if let Some(skin) = skin_type {
        out.push_str("Skin type: ");
        out.push_str(skin);
        out.push_str(". ");
    }
    if !preferences.is_empty() {
        out.push_str("Preferences: ");
        out.push_str(&last_n(preferences, CONTEXT_PREFERENCES_LIMIT).join("; "));
        out.push_str(". ");
    }
    if !recommendations.is_empty() {
        out.push_str("Previous recommendations: ");
        out.push_str(&last_n(recommendations, CONTEXT_RECOMMENDATIONS_LIMIT).join("; "));
    }
    Some(out)
}

/// Builds the message list for the model endpoint.
///
/// # Order
///
/// System(system_message) → optional System(user_context) → recent history (roles kept) → User(current_question).
///
/// # Returns
///
/// `Vec<ChatMessage>` ready to be serialised as the request's `messages` array.
pub fn format_for_model_as_messages(
    system_message: &str,
    user_context: Option<&str>,
    recent_messages: &[ChatMessage],
    current_question: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(recent_messages.len() + 3);
    messages.push(ChatMessage::system(system_message));
    if let Some(context) = user_context {
        messages.push(ChatMessage::system(context));
    }
    messages.extend(recent_messages.iter().cloned());
    messages.push(ChatMessage::user(current_question));
    messages
}

/// Formats a message as a "Role: content" line.
pub fn format_message_line(message: &ChatMessage) -> String {
    let role = match message.role {
        MessageRole::User => "User",
        MessageRole::Assistant => "Assistant",
        MessageRole::System => "System",
    };
    format!("{}: {}", role, message.content)
}
