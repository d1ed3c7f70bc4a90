//! Bounded conversation history (sliding window over the most recent turns).

use prompt::ChatMessage;

/// Maximum number of turns kept (10 exchanges).
pub const MAX_HISTORY_MESSAGES: usize = 20;

/// Append-only log of exchanged turns, truncated from the front after each append.
///
/// Truncation is a plain sliding window and may split a user/assistant pair.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<ChatMessage>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the user turn and, when present, the assistant turn right after it; then keeps only
    /// the last [`MAX_HISTORY_MESSAGES`] turns.
    pub fn append(&mut self, user_message: &str, assistant_response: Option<&str>) {
        self.messages.push(ChatMessage::user(user_message));
        if let Some(reply) = assistant_response {
            self.messages.push(ChatMessage::assistant(reply));
        }
        if self.messages.len() > MAX_HISTORY_MESSAGES {
            let excess = self.messages.len() - MAX_HISTORY_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    /// Returns the last `n` turns (fewer if the history is shorter), oldest first.
    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
