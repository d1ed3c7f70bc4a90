//! # memory-core
//!
//! Session-lifetime memory: the [`UserProfile`] facts learned from the conversation and the
//! bounded [`ConversationHistory`] of exchanged turns. Both are owned by a single session; nothing
//! here is persisted.

mod history;
mod types;

pub use history::{ConversationHistory, MAX_HISTORY_MESSAGES};
pub use types::{ParseSkinTypeError, SkinType, UserProfile, MAX_STORED_FACTS};
