//! Conversation session: one chat's profile and history, and the turn loop over them.

use advisor_core::{truncate_for_log, Renderer, MAX_LOG_CONTENT_LEN};
use llm_client::{LlmClient, LlmError};
use memory_core::{ConversationHistory, UserProfile};
use memory_strategies::{ContextBuilder, FactExtractor};
use prompt::ChatMessage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::messages::{user_message, GREETING};

const DEFAULT_THINKING_MESSAGE: &str = "Thinking...";

/// Result of one submitted utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Utterance was empty after trimming; nothing rendered or sent.
    Ignored,
    /// Another turn is still awaiting its response; nothing rendered or sent.
    Busy,
    /// The model replied; profile and history were updated.
    Replied(String),
    /// The request failed; `message` was rendered and session state is unchanged.
    Failed { error: LlmError, message: String },
}

#[derive(Debug, Default)]
struct SessionState {
    profile: UserProfile,
    history: ConversationHistory,
}

/// Marks a turn as running; cleared on drop so a cancelled turn does not wedge the session.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Logs the exact messages submitted to the model (role + content preview) for debugging.
fn log_messages_submitted_to_ai(messages: &[ChatMessage]) {
    debug!(count = messages.len(), "submit_to_ai: message list");
    for (i, m) in messages.iter().enumerate() {
        debug!(
            index = i,
            role = ?m.role,
            content = %truncate_for_log(&m.content, MAX_LOG_CONTENT_LEN),
            "submit_to_ai message"
        );
    }
}

/// Chat session: owns the [`UserProfile`] and [`ConversationHistory`] for its lifetime.
///
/// Turns are single-flight: a turn submitted while another awaits its response returns
/// [`TurnOutcome::Busy`]. Snapshots never block on an in-flight turn and see the state as of the
/// last completed exchange.
///
/// **External interactions:** LLM endpoint (via [`LlmClient`]), chat window (via [`Renderer`]).
pub struct ConversationSession {
    llm_client: Arc<dyn LlmClient>,
    renderer: Arc<dyn Renderer>,
    extractor: FactExtractor,
    context_builder: ContextBuilder,
    thinking_message: String,
    state: Mutex<SessionState>,
    in_flight: AtomicBool,
}

impl ConversationSession {
    // ---------- Construction ----------

    pub fn new(llm_client: Arc<dyn LlmClient>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            llm_client,
            renderer,
            extractor: FactExtractor::new(),
            context_builder: ContextBuilder::new(),
            thinking_message: DEFAULT_THINKING_MESSAGE.to_string(),
            state: Mutex::new(SessionState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Placeholder shown while a turn awaits its response.
    pub fn with_thinking_message(mut self, message: impl Into<String>) -> Self {
        self.thinking_message = message.into();
        self
    }

    /// Replaces the default system instruction.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.context_builder = self.context_builder.with_system_message(prompt);
        self
    }

    // ---------- Turn handling ----------

    /// Renders the greeting.
    pub async fn start(&self) {
        if let Err(e) = self.renderer.render_greeting(GREETING).await {
            error!(error = %e, "Failed to render greeting");
        }
    }

    /// Runs one turn for `utterance`.
    ///
    /// Empty input is ignored. Otherwise the pending exchange is rendered, the context is built
    /// and sent, and on success the profile and history are updated before the reply is rendered.
    /// Failures render a user-facing message and leave the profile and history untouched.
    #[instrument(skip(self, utterance))]
    pub async fn handle_turn(&self, utterance: &str) -> TurnOutcome {
        let question = utterance.trim();
        if question.is_empty() {
            debug!("Empty utterance ignored");
            return TurnOutcome::Ignored;
        }

        let _turn = match InFlightGuard::acquire(&self.in_flight) {
            Some(guard) => guard,
            None => {
                warn!(
                    question = %truncate_for_log(question, MAX_LOG_CONTENT_LEN),
                    "Turn rejected: previous turn still awaiting response"
                );
                return TurnOutcome::Busy;
            }
        };

        let messages = {
            let state = self.state.lock().await;
            info!(
                question = %truncate_for_log(question, MAX_LOG_CONTENT_LEN),
                history_len = state.history.len(),
                "step: turn started"
            );
            self.context_builder
                .build(&state.profile, &state.history, question)
        };
        self.render_exchange(question, &self.thinking_message).await;
        log_messages_submitted_to_ai(&messages);

        match self.llm_client.complete(&messages).await {
            Ok(reply) => {
                {
                    let mut state = self.state.lock().await;
                    let state = &mut *state;
                    // An empty reply is not recorded as an assistant turn.
                    let recorded = Some(reply.as_str()).filter(|r| !r.is_empty());
                    self.extractor.update(&mut state.profile, question, recorded);
                    state.history.append(question, recorded);
                    info!(
                        reply_len = reply.len(),
                        history_len = state.history.len(),
                        "step: turn completed"
                    );
                }
                self.render_exchange(question, &reply).await;
                TurnOutcome::Replied(reply)
            }
            Err(e) => {
                if e.is_transport() || matches!(e, LlmError::Timeout) {
                    error!(error = %e, "Error calling LLM endpoint");
                } else {
                    warn!(error = %e, "LLM endpoint returned an unusable response");
                }
                let message = user_message(&e);
                self.render_exchange(question, &message).await;
                TurnOutcome::Failed { error: e, message }
            }
        }
    }

    async fn render_exchange(&self, user_text: &str, assistant_text: &str) {
        if let Err(e) = self.renderer.render_exchange(user_text, assistant_text).await {
            error!(error = %e, "Failed to render exchange");
        }
    }

    // ---------- Inspection ----------

    /// Snapshot of the user profile.
    pub async fn profile(&self) -> UserProfile {
        self.state.lock().await.profile.clone()
    }

    /// Snapshot of the conversation history.
    pub async fn history(&self) -> ConversationHistory {
        self.state.lock().await.history.clone()
    }

    /// The message list that would be sent for `utterance` right now.
    pub async fn preview_messages(&self, utterance: &str) -> Vec<ChatMessage> {
        let state = self.state.lock().await;
        self.context_builder
            .build(&state.profile, &state.history, utterance.trim())
    }
}
