//! Core data types for the chatbot intent repository and match results

use serde::{Deserialize, Serialize};

/// A cluster of trigger phrases mapped to candidate replies and links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub tags: Vec<String>,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

/// A suggested quick-reply button shown when the bot is unsure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: String,
    pub value: String,
}

/// Generic answers used when no intent scores high enough
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fallback {
    #[serde(default)]
    pub responses: Vec<String>,
    #[serde(default, alias = "quickReplies")]
    pub quick_replies: Vec<QuickReply>,
}

/// The whole intent repository, as stored in `chatbot_intents.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatbotConfig {
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub intents: Vec<Intent>,
    #[serde(default)]
    pub fallback: Option<Fallback>,
    /// Starter questions offered before the first user message
    #[serde(default, rename = "quickReplies")]
    pub starter_replies: Vec<String>,
}

/// Result of matching one user utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub response: String,
    pub links: Vec<String>,
    pub confidence: u32,
}

impl Intent {
    pub fn new(
        tags: Vec<String>,
        patterns: Vec<String>,
        responses: Vec<String>,
        links: Vec<String>,
    ) -> Self {
        Self {
            tags,
            patterns,
            responses,
            links,
        }
    }

    /// Short human-readable name for logs and errors
    pub fn label(&self) -> String {
        self.tags
            .first()
            .or_else(|| self.patterns.first())
            .cloned()
            .unwrap_or_else(|| "<unnamed>".to_string())
    }
}

impl QuickReply {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Fallback {
    /// Quick replies of an optional fallback block
    pub fn quick_replies_of(fallback: Option<&Fallback>) -> &[QuickReply] {
        fallback.map(|f| f.quick_replies.as_slice()).unwrap_or(&[])
    }
}

impl ChatbotConfig {
    /// Fallback responses, if a non-empty set is configured
    pub fn fallback_responses(&self) -> Option<&[String]> {
        self.fallback
            .as_ref()
            .map(|f| f.responses.as_slice())
            .filter(|r| !r.is_empty())
    }

    /// Quick replies offered alongside the fallback set
    pub fn quick_replies(&self) -> &[QuickReply] {
        Fallback::quick_replies_of(self.fallback.as_ref())
    }
}

impl MatchResult {
    pub fn new(response: String, links: Vec<String>, confidence: u32) -> Self {
        Self {
            response,
            links,
            confidence,
        }
    }

    /// A zero-confidence answer carrying no links
    pub fn unmatched(response: String) -> Self {
        Self::new(response, Vec::new(), 0)
    }
}
