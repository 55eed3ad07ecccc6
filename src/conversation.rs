//! Conversation state threaded through each chat turn
//!
//! The matcher is stateless. Everything the chat view needs between turns
//! (history, last confidence) lives in a [`ConversationState`] value that is
//! passed into [`ConversationState::send`] and returned from it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher::{Matcher, MIN_CONFIDENCE};
use crate::types::QuickReply;

/// Confidence assumed before the first turn, high enough to hide quick replies
pub const INITIAL_CONFIDENCE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: usize,
    pub text: String,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    pub last_confidence: u32,
}

impl ConversationState {
    /// Start a conversation with a bot greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 0,
                text: greeting.into(),
                sender: Sender::Bot,
                links: Vec::new(),
            }],
            last_confidence: INITIAL_CONFIDENCE,
        }
    }

    /// Run one turn: record the user text, answer it, record the answer
    ///
    /// Blank input leaves the state untouched.
    pub fn send<R: Rng + ?Sized>(mut self, matcher: &Matcher, text: &str, rng: &mut R) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return self;
        }

        self.push(text.to_string(), Sender::User, Vec::new());

        let result = matcher.find_best_intent(text, rng);
        debug!(turn = self.messages.len(), confidence = result.confidence, "bot answered");

        self.push(result.response, Sender::Bot, result.links);
        self.last_confidence = result.confidence;
        self
    }

    pub fn shows_quick_replies(&self) -> bool {
        self.last_confidence < MIN_CONFIDENCE
    }

    /// Quick replies to display after the last turn, if any
    pub fn quick_replies<'a>(&self, matcher: &'a Matcher) -> &'a [QuickReply] {
        if self.shows_quick_replies() {
            matcher.quick_replies()
        } else {
            &[]
        }
    }

    /// Starter questions, offered only while the greeting is the only message
    pub fn starter_replies<'a>(&self, matcher: &'a Matcher) -> &'a [String] {
        if self.messages.len() == 1 {
            matcher.starter_replies()
        } else {
            &[]
        }
    }

    pub fn last_bot_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.sender == Sender::Bot)
    }

    fn push(&mut self, text: String, sender: Sender, links: Vec<String>) {
        let id = self.messages.len();
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            links,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatbotConfig, Fallback, Intent};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn matcher() -> Matcher {
        Matcher::new(ChatbotConfig {
            default: "Je ne comprends pas".to_string(),
            intents: vec![Intent::new(
                vec!["missions".to_string()],
                vec!["mission".to_string()],
                vec!["Voici les missions".to_string()],
                vec!["/missions".to_string()],
            )],
            fallback: Some(Fallback {
                responses: vec!["Reformule ?".to_string()],
                quick_replies: vec![QuickReply::new("Missions", "mission")],
            }),
            starter_replies: vec!["C'est quoi le BUT SD ?".to_string()],
        })
        .unwrap()
    }

    #[test]
    fn test_initial_state_hides_quick_replies() {
        let state = ConversationState::new("Salut !");
        assert_eq!(state.messages.len(), 1);
        assert!(!state.shows_quick_replies());
        assert!(state.quick_replies(&matcher()).is_empty());
    }

    #[test]
    fn test_turn_appends_both_messages() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let m = matcher();
        let state = ConversationState::new("Salut !").send(&m, "  les missions  ", &mut rng);

        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.messages[1].sender, Sender::User);
        assert_eq!(state.messages[1].text, "les missions");
        assert_eq!(state.messages[2].text, "Voici les missions");
        assert_eq!(state.messages[2].links, vec!["/missions"]);
        assert_eq!(
            state.messages.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(!state.shows_quick_replies());
    }

    #[test]
    fn test_low_confidence_shows_quick_replies() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let m = matcher();
        let state = ConversationState::new("Salut !").send(&m, "bonjour", &mut rng);
        assert_eq!(state.last_confidence, 0);
        assert_eq!(state.quick_replies(&m).len(), 1);
        assert_eq!(state.last_bot_message().unwrap().text, "Reformule ?");

        // a good match hides them again
        let state = state.send(&m, "mission", &mut rng);
        assert!(state.quick_replies(&m).is_empty());
    }

    #[test]
    fn test_starter_replies_only_before_first_turn() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let m = matcher();
        let state = ConversationState::new("Salut !");
        assert_eq!(state.starter_replies(&m), ["C'est quoi le BUT SD ?"]);

        let state = state.send(&m, "mission", &mut rng);
        assert!(state.starter_replies(&m).is_empty());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let before = ConversationState::new("Salut !");
        let after = before.clone().send(&matcher(), "   ", &mut rng);
        assert_eq!(before, after);
    }
}
