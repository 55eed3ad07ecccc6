//! Question detection for French user input

use std::sync::LazyLock;

use regex::Regex;

// Plain alternation, no word boundaries: "qui" also matches inside "équipe".
static QUESTION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"quoi|comment|pourquoi|qui|quand|où|est-ce|peut-on|faut-il|dois-je")
        .expect("Invalid regex pattern")
});

/// Whether the text looks like a question
pub fn is_question(text: &str) -> bool {
    QUESTION_WORDS.is_match(&text.to_lowercase()) || text.trim().ends_with('?')
}
