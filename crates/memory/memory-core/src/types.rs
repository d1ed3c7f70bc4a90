//! # Core Types
//!
//! ## SkinType
//!
//! The skin types the advisor recognises in free text.
//!
//! ## UserProfile
//!
//! Facts about the user gathered during the session. Fields are enriched or overwritten, never
//! cleared.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on stored preferences and on stored recommendations; oldest entries are dropped.
///
/// The prompt only samples the last few of each, so the bound does not change what is sent.
pub const MAX_STORED_FACTS: usize = 50;

/// Skin type declared by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Sensitive,
    Normal,
}

impl SkinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::Normal => "normal",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown skin type: {0}")]
pub struct ParseSkinTypeError(pub String);

impl FromStr for SkinType {
    type Err = ParseSkinTypeError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oily" => Ok(SkinType::Oily),
            "dry" => Ok(SkinType::Dry),
            "combination" => Ok(SkinType::Combination),
            "sensitive" => Ok(SkinType::Sensitive),
            "normal" => Ok(SkinType::Normal),
            _ => Err(ParseSkinTypeError(s.to_string())),
        }
    }
}

/// Facts about the user learned during the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Last declared name.
    pub name: Option<String>,
    /// Last declared skin type.
    pub skin_type: Option<SkinType>,
    /// Whole utterances that mentioned a preference keyword, oldest first.
    pub preferences: Vec<String>,
    /// Whole assistant replies that mentioned a recommendation, oldest first.
    pub previous_recommendations: Vec<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_skin_type(&mut self, skin_type: SkinType) {
        self.skin_type = Some(skin_type);
    }

    pub fn add_preference(&mut self, utterance: impl Into<String>) {
        push_bounded(&mut self.preferences, utterance.into());
    }

    pub fn add_recommendation(&mut self, reply: impl Into<String>) {
        push_bounded(&mut self.previous_recommendations, reply.into());
    }

    /// True when nothing has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.skin_type.is_none()
            && self.preferences.is_empty()
            && self.previous_recommendations.is_empty()
    }
}

fn push_bounded(items: &mut Vec<String>, item: String) {
    items.push(item);
    if items.len() > MAX_STORED_FACTS {
        let excess = items.len() - MAX_STORED_FACTS;
        items.drain(..excess);
    }
}
