//! Intent matcher - picks the best-scoring intent for a user utterance

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::ConfigError;
use crate::scoring::{normalize, score_intent, PreparedIntent};
use crate::types::{ChatbotConfig, Fallback, MatchResult, QuickReply};

/// Minimum winning score; below it the fallback or default answers
pub const MIN_CONFIDENCE: u32 = 5;
/// Inputs shorter than this (after normalization) are not scored
pub const MIN_INPUT_CHARS: usize = 2;

/// Matches free text against a validated, read-only intent repository
#[derive(Debug, Clone)]
pub struct Matcher {
    default: String,
    intents: Vec<PreparedIntent>,
    fallback: Option<Fallback>,
    starter_replies: Vec<String>,
}

impl Matcher {
    /// Build a matcher, validating the repository first
    pub fn new(config: ChatbotConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ChatbotConfig {
            default,
            intents,
            fallback,
            starter_replies,
        } = config;

        Ok(Self {
            default,
            intents: intents.into_iter().map(PreparedIntent::new).collect(),
            fallback,
            starter_replies,
        })
    }

    pub fn default_message(&self) -> &str {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Quick replies to suggest when confidence is low
    pub fn quick_replies(&self) -> &[QuickReply] {
        Fallback::quick_replies_of(self.fallback.as_ref())
    }

    /// Starter questions to offer before the first user message
    pub fn starter_replies(&self) -> &[String] {
        &self.starter_replies
    }

    /// Match user input, drawing responses with the given generator
    ///
    /// Only `response` depends on `rng`; `links` and `confidence` are a pure
    /// function of the input and the repository.
    pub fn find_best_intent<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> MatchResult {
        let normalized = normalize(text);

        if normalized.chars().count() < MIN_INPUT_CHARS {
            return MatchResult::unmatched(self.default.clone());
        }

        let mut best: Option<MatchResult> = None;
        let mut best_score = 0;

        for prepared in &self.intents {
            let scored = score_intent(&normalized, prepared);

            // Strict comparison: on ties the earlier intent wins.
            if scored.score > best_score {
                best_score = scored.score;
                if let Some(response) = prepared.intent.responses.choose(rng) {
                    best = Some(MatchResult::new(
                        response.clone(),
                        prepared.intent.links.clone(),
                        scored.score,
                    ));
                }
            }
        }

        if let Some(result) = best.filter(|_| best_score >= MIN_CONFIDENCE) {
            debug!(confidence = result.confidence, "intent matched");
            return result;
        }

        if let Some(response) = self
            .fallback
            .as_ref()
            .and_then(|f| f.responses.choose(rng))
        {
            debug!(best_score, "no intent above threshold, using fallback");
            return MatchResult::unmatched(response.clone());
        }

        debug!(best_score, "no intent above threshold, using default");
        MatchResult::unmatched(self.default.clone())
    }

    /// Same as [`Matcher::find_best_intent`] with the thread-local generator
    pub fn respond(&self, text: &str) -> MatchResult {
        self.find_best_intent(text, &mut rand::thread_rng())
    }
}
