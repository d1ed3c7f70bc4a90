//! User fact extraction.
//!
//! Picks the user's name, skin type, preferences and received recommendations out of free text.
//! External interactions: mutates the session's [`UserProfile`]; AI personalization reads it back
//! through [`crate::ContextBuilder`].

use memory_core::{SkinType, UserProfile};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::utils::{truncate_for_log, MAX_LOG_CONTENT_LEN};

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u:my name is|i'm|i am|call me)\s+([a-zA-Z]+)").expect("Invalid regex")
});

static SKIN_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u:my skin is|i have)\s+(?i-u:(oily|dry|combination|sensitive|normal))\s+(?i-u:skin)",
    )
    .expect("Invalid regex")
});

/// Keywords that mark an utterance as a preference statement, checked in this order.
pub const PREFERENCE_KEYWORDS: [&str; 6] =
    ["prefer", "like", "love", "hate", "dislike", "allergic to"];

/// Keyword that marks an assistant reply as a recommendation.
const RECOMMENDATION_KEYWORD: &str = "recommend";

/// Extracts user facts from one exchange using literal pattern matching.
///
/// # Detection Patterns
///
/// - **Name**: first "my name is / i'm / i am / call me" followed by a single ASCII-letter word
/// - **Skin type**: first "my skin is / i have" followed by a known skin type and "skin"
/// - **Preferences**: the whole utterance, once for every keyword it contains
/// - **Recommendations**: the whole reply when it contains "recommend"
///
/// # Limitations
///
/// - Simple pattern matching, not semantic analysis
/// - Keywords are substring matches, so "dislike" also counts as "like" and the utterance is
///   stored twice
#[derive(Debug, Clone, Default)]
pub struct FactExtractor;

impl FactExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Updates `profile` from a user utterance and, when present, the assistant reply to it.
    ///
    /// Later matches overwrite the name and skin type; preferences and recommendations are only
    /// appended. Never fails: text that matches nothing leaves the profile unchanged.
    pub fn update(
        &self,
        profile: &mut UserProfile,
        user_message: &str,
        assistant_response: Option<&str>,
    ) {
        if let Some(name) = extract_name(user_message) {
            debug!(name = %name, "FactExtractor: name detected");
            profile.set_name(name);
        }

        if let Some(skin_type) = extract_skin_type(user_message) {
            debug!(skin_type = %skin_type, "FactExtractor: skin type detected");
            profile.set_skin_type(skin_type);
        }

        let matched = matching_preference_keywords(user_message);
        for keyword in &matched {
            profile.add_preference(user_message);
            debug!(
                keyword = keyword,
                utterance = %truncate_for_log(user_message, MAX_LOG_CONTENT_LEN),
                "FactExtractor: preference stored"
            );
        }

        if let Some(reply) = assistant_response {
            if reply.to_lowercase().contains(RECOMMENDATION_KEYWORD) {
                profile.add_recommendation(reply);
                debug!(
                    reply = %truncate_for_log(reply, MAX_LOG_CONTENT_LEN),
                    "FactExtractor: recommendation stored"
                );
            }
        }
    }
}

/// First declared name in `text`, original case kept.
fn extract_name(text: &str) -> Option<&str> {
    NAME_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First declared skin type in `text`.
fn extract_skin_type(text: &str) -> Option<SkinType> {
    SKIN_TYPE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Preference keywords present in `text` (case-insensitive substring), in keyword order.
fn matching_preference_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    PREFERENCE_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}
