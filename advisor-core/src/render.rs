//! Rendering abstraction for the chat window.
//!
//! [`Renderer`] is the only way the session shows anything to the user. The session calls it but
//! never implements it; hosts (terminal, tests) provide implementations.

use crate::error::Result;
use async_trait::async_trait;

/// Draws the chat window. Each call replaces what is shown: the window holds the greeting, or a
/// single exchange (user text plus assistant text, placeholder or error message).
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Shows the initial greeting before any turn.
    async fn render_greeting(&self, greeting: &str) -> Result<()>;
    /// Clears the window and shows `user_text` followed by `assistant_text`.
    async fn render_exchange(&self, user_text: &str, assistant_text: &str) -> Result<()>;
}
