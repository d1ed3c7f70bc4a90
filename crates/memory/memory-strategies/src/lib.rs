//! # memory-strategies
//!
//! Turns the session memory into model context and back:
//!
//! - [`FactExtractor`] reads a finished exchange and updates the [`memory_core::UserProfile`].
//! - [`ContextBuilder`] assembles the message list for the next request from the profile, the
//!   recent history and the new utterance.
//!
//! External interactions: none; both operate on in-memory session state.

mod context_builder;
mod extractor;
mod utils;

pub use context_builder::{ContextBuilder, RECENT_HISTORY_WINDOW};
pub use extractor::{FactExtractor, PREFERENCE_KEYWORDS};
