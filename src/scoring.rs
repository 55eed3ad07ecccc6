//! Keyword-containment scoring of an utterance against one intent
//!
//! Scores are additive integers:
//! 1. Pattern contained in the text → +10
//! 2. Text starts with the pattern → +5 (independent of 1)
//! 3. Each pattern word longer than 3 chars found in the text → +2
//! 4. More than one pattern contained → +3 per contained pattern

use crate::types::Intent;

pub const SUBSTRING_SCORE: u32 = 10;
pub const PREFIX_SCORE: u32 = 5;
pub const KEYWORD_SCORE: u32 = 2;
/// Pattern words must be strictly longer than this to count as keywords
pub const KEYWORD_MIN_CHARS: usize = 3;
pub const CORROBORATION_BONUS: u32 = 3;

/// A pattern lowercased and split once, at load time
#[derive(Debug, Clone)]
pub struct PreparedPattern {
    pub text: String,
    pub keywords: Vec<String>,
}

/// An intent with its patterns ready for scoring
#[derive(Debug, Clone)]
pub struct PreparedIntent {
    pub intent: Intent,
    pub patterns: Vec<PreparedPattern>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentScore {
    pub score: u32,
    pub matches_found: u32,
}

impl PreparedPattern {
    pub fn new(pattern: &str) -> Self {
        let text = pattern.to_lowercase();
        let keywords = text
            .split_whitespace()
            .filter(|word| word.chars().count() > KEYWORD_MIN_CHARS)
            .map(str::to_string)
            .collect();
        Self { text, keywords }
    }
}

impl PreparedIntent {
    pub fn new(intent: Intent) -> Self {
        let patterns = intent
            .patterns
            .iter()
            .map(|p| PreparedPattern::new(p))
            .collect();
        Self { intent, patterns }
    }
}

/// Lowercase and trim raw user input
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Score already-normalized text against an intent
pub fn score_intent(normalized: &str, intent: &PreparedIntent) -> IntentScore {
    let mut score = 0;
    let mut matches_found = 0;

    for pattern in &intent.patterns {
        if normalized.contains(pattern.text.as_str()) {
            score += SUBSTRING_SCORE;
            matches_found += 1;
        }

        if normalized.starts_with(pattern.text.as_str()) {
            score += PREFIX_SCORE;
        }

        for word in &pattern.keywords {
            if normalized.contains(word.as_str()) {
                score += KEYWORD_SCORE;
            }
        }
    }

    if matches_found > 1 {
        score += matches_found * CORROBORATION_BONUS;
    }

    IntentScore {
        score,
        matches_found,
    }
}
