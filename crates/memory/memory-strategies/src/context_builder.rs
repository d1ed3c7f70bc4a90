//! Context builder: assembles the request message list from session memory.

use memory_core::{ConversationHistory, UserProfile};
use prompt::{
    format_for_model_as_messages, format_user_context, ChatMessage, DEFAULT_SYSTEM_MESSAGE,
};
use tracing::{debug, info};

/// Number of most recent history turns sent with each request.
pub const RECENT_HISTORY_WINDOW: usize = 6;

/// Builds the message list for one request.
///
/// # Order
///
/// 1. System instruction
/// 2. User context (system role), only when name, skin type or preferences are known
/// 3. Last [`RECENT_HISTORY_WINDOW`] history turns
/// 4. The new user utterance
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    system_message: String,
    history_window: usize,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
            history_window: RECENT_HISTORY_WINDOW,
        }
    }

    pub fn with_system_message(mut self, message: impl Into<String>) -> Self {
        self.system_message = message.into();
        self
    }

    pub fn system_message(&self) -> &str {
        &self.system_message
    }

    /// Returns the message list to send for `user_message`. Infallible; with an empty profile and
    /// history this is `[System, User(user_message)]`.
    pub fn build(
        &self,
        profile: &UserProfile,
        history: &ConversationHistory,
        user_message: &str,
    ) -> Vec<ChatMessage> {
        let skin_type = profile.skin_type.map(|s| s.as_str());
        let user_context = format_user_context(
            profile.name.as_deref(),
            skin_type,
            &profile.preferences,
            &profile.previous_recommendations,
        );
        let recent = history.recent(self.history_window);

        match &user_context {
            Some(context) => {
                debug!(user_context = %context, "ContextBuilder: user context included")
            }
            None => debug!("ContextBuilder: no user context"),
        }

        let messages = format_for_model_as_messages(
            &self.system_message,
            user_context.as_deref(),
            recent,
            user_message,
        );

        info!(
            message_count = messages.len(),
            history_count = recent.len(),
            has_user_context = user_context.is_some(),
            "step: context built"
        );

        messages
    }
}
