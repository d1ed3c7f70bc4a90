//! Terminal implementation of [`Renderer`].

use advisor_core::{AdvisorError, Renderer, Result};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

/// Prints exchanges as `You:` / `Advisor:` lines.
///
/// The pending placeholder is printed as its own line; when the final reply for the same
/// question follows, only the `Advisor:` line is printed.
pub struct ConsoleRenderer {
    out: Mutex<Box<dyn Write + Send>>,
    pending_marker: String,
    pending_user_text: Mutex<Option<String>>,
}

impl ConsoleRenderer {
    pub fn new(out: Box<dyn Write + Send>, pending_marker: impl Into<String>) -> Self {
        Self {
            out: Mutex::new(out),
            pending_marker: pending_marker.into(),
            pending_user_text: Mutex::new(None),
        }
    }

    pub fn stdout(pending_marker: impl Into<String>) -> Self {
        Self::new(Box::new(std::io::stdout()), pending_marker)
    }

    /// Writes a line outside of any exchange (command output, prompts).
    pub fn print_line(&self, text: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|e| AdvisorError::Render(e.to_string()))?;
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl Renderer for ConsoleRenderer {
    async fn render_greeting(&self, greeting: &str) -> Result<()> {
        self.print_line(&format!("Advisor: {}", greeting))
    }

    async fn render_exchange(&self, user_text: &str, assistant_text: &str) -> Result<()> {
        let mut pending = self
            .pending_user_text
            .lock()
            .map_err(|e| AdvisorError::Render(e.to_string()))?;
        let continues_pending = pending.as_deref() == Some(user_text);

        if assistant_text == self.pending_marker {
            *pending = Some(user_text.to_string());
            drop(pending);
            self.print_line(&format!("You: {}", user_text))?;
            return self.print_line(&format!("  {}", assistant_text));
        }

        *pending = None;
        drop(pending);
        if !continues_pending {
            self.print_line(&format!("You: {}", user_text))?;
        }
        self.print_line(&format!("Advisor: {}", assistant_text))
    }
}
