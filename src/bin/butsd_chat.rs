use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use butsd_core::{is_question, ChatbotConfig, ConversationState, Matcher};
use tracing_subscriber::EnvFilter;

const GREETING: &str = "Salut ! 👋 Je suis là pour répondre à tes questions sur le BUT Science des Données. Tu veux savoir quoi ?";

const LINK_LABELS: [(&str, &str); 5] = [
    ("/missions", "Missions"),
    ("/careers", "Débouchés"),
    ("/program", "Formation"),
    ("/faq", "FAQ"),
    ("/apply", "Candidater"),
];

/// Page name for a known link, the raw target otherwise
fn link_label(link: &str) -> &str {
    LINK_LABELS
        .iter()
        .find(|(target, _)| *target == link)
        .map_or(link, |&(_, label)| label)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: butsd-chat <chatbot_intents.json>")?;
    let config = ChatbotConfig::from_path(&path)
        .with_context(|| format!("loading intent repository from {}", path))?;
    let matcher = Matcher::new(config)?;
    tracing::info!(intents = matcher.len(), "chatbot ready");

    let mut rng = rand::thread_rng();
    let mut state = ConversationState::new(GREETING);
    println!("🤖 {}", GREETING);
    for starter in state.starter_replies(&matcher) {
        println!("   • {}", starter);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        tracing::debug!(question = is_question(&line), "user message");

        state = state.send(&matcher, &line, &mut rng);
        if let Some(reply) = state.last_bot_message() {
            writeln!(stdout, "🤖 {}", reply.text)?;
            for link in &reply.links {
                writeln!(stdout, "   → {} ({})", link_label(link), link)?;
            }
        }
        for quick in state.quick_replies(&matcher) {
            writeln!(stdout, "   [{}] {}", quick.label, quick.value)?;
        }
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_labels() {
        assert_eq!(link_label("/careers"), "Débouchés");
        assert_eq!(link_label("/apply"), "Candidater");
        assert_eq!(link_label("/ailleurs"), "/ailleurs");
    }
}
