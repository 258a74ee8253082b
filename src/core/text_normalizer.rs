//! Text Normalization
//!
//! Strips command phrases, politeness, articles and filler words from a raw
//! utterance before it is segmented into items.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

lazy_static! {
    /// At most one imperative prefix, anchored at the start
    static ref COMMAND_PREFIX: Regex = Regex::new(
        r"^(?:i need|get me|pick up|i want|buy|add|get|grab|find|take)\b[\s,]*"
    )
    .expect("command prefix pattern");

    /// At most one politeness suffix, anchored at the end
    static ref POLITE_SUFFIX: Regex = Regex::new(
        r"[\s,]*\b(?:thank you very much|thank you so much|thanks a lot|thank you|thanks|please|pls|plz|thx)$"
    )
    .expect("politeness suffix pattern");

    static ref TRAILING_PUNCT: Regex = Regex::new(r"[\s.!?]+$").expect("punctuation pattern");
}

/// Articles and determiners dropped when they precede another word
pub const ARTICLES: &[&str] = &["some", "a", "an", "the", "this", "that", "these", "those"];

/// Words that never name an item
pub const FILLER_WORDS: &[&str] = &[
    // interjections
    "uh", "uhh", "um", "umm", "hmm", "hm", "er", "erm", "ah", "oh", "ok", "okay", "well", "so",
    "yeah", "yes",
    // pronouns
    "i", "me", "my", "we", "us", "our", "you", "your", "i'd", "i'll", "i'm", "we'll", "let's",
    // hedges
    "like", "basically", "actually", "just", "maybe", "probably", "really", "kinda", "perhaps",
    // redundant verbs
    "get", "buy", "grab", "find", "take", "need", "want", "add", "to",
    // sequence words
    "first", "then", "finally", "now", "today", "tomorrow", "later", "lastly",
    // politeness left mid-sentence
    "please",
];

/// Punctuation that separates items and must survive filler removal
const SEPARATOR_PUNCT: &[char] = &[',', ';'];

/// Normalizes spoken or typed text into a cleaned item string
pub struct TextNormalizer {
    fillers: HashSet<&'static str>,
    articles: HashSet<&'static str>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            fillers: FILLER_WORDS.iter().copied().collect(),
            articles: ARTICLES.iter().copied().collect(),
        }
    }

    /// True for a bare filler word or article
    pub fn is_filler(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.fillers.contains(word.as_str()) || self.articles.contains(word.as_str())
    }

    /// Normalize raw text; an empty result means no items
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let mut result = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

        result = TRAILING_PUNCT.replace(&result, "").into_owned();
        result = COMMAND_PREFIX.replace(&result, "").into_owned();
        result = POLITE_SUFFIX.replace(&result, "").into_owned();

        let tokens: Vec<&str> = result.split_whitespace().collect();
        let without_articles = self.strip_articles(&tokens);
        let cleaned = self.strip_fillers(&without_articles);

        debug!("Normalized '{}' -> '{}'", text, cleaned);
        cleaned
    }

    fn strip_articles<'a>(&self, tokens: &[&'a str]) -> Vec<&'a str> {
        let mut kept = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let precedes_word = tokens
                .get(i + 1)
                .and_then(|next| next.chars().next())
                .map_or(false, |c| c.is_alphanumeric());
            if precedes_word && self.articles.contains(*token) {
                continue;
            }
            kept.push(*token);
        }
        kept
    }

    fn strip_fillers(&self, tokens: &[&str]) -> String {
        let mut kept: Vec<String> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let bare = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if !self.fillers.contains(bare) {
                kept.push(token.to_string());
                continue;
            }

            // "milk um, eggs" keeps its comma on "milk"
            if let Some(sep) = token.chars().last().filter(|c| SEPARATOR_PUNCT.contains(c)) {
                if let Some(prev) = kept.last_mut() {
                    if !prev.ends_with(SEPARATOR_PUNCT) {
                        prev.push(sep);
                    }
                }
            }
        }

        kept.join(" ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("MILK   Eggs"), "milk eggs");
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   "), "");
    }

    #[test]
    fn test_command_prefix_and_politeness() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("I need basmati rice, tumeric, and 2 apples please"),
            "basmati rice, tumeric, and 2 apples"
        );
        assert_eq!(normalizer.normalize("Get me bread thank you."), "bread");
        assert_eq!(normalizer.normalize("pick up oat milk, thanks!"), "oat milk");
    }

    #[test]
    fn test_prefix_is_anchored_and_word_bounded() {
        let normalizer = TextNormalizer::new();
        // "buy" only at the start, and not inside "buyer"
        assert_eq!(normalizer.normalize("milk buy"), "milk");
        assert_eq!(normalizer.normalize("addu"), "addu");
    }

    #[test]
    fn test_articles_stripped_everywhere() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("some milk and the eggs and a loaf"),
            "milk and eggs and loaf"
        );
        assert_eq!(normalizer.normalize("those apples"), "apples");
    }

    #[test]
    fn test_fillers_removed() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("um I basically just want like milk"),
            "milk"
        );
        assert_eq!(
            normalizer.normalize("first bread then maybe butter"),
            "bread butter"
        );
    }

    #[test]
    fn test_separator_survives_filler_removal() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("milk um, eggs"), "milk, eggs");
    }

    #[test]
    fn test_all_filler_is_empty() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("uh um hmm, please"), "");
        assert_eq!(normalizer.normalize("I need"), "");
    }

    #[test]
    fn test_is_filler() {
        let normalizer = TextNormalizer::new();
        assert!(normalizer.is_filler("Um"));
        assert!(normalizer.is_filler("the"));
        assert!(!normalizer.is_filler("milk"));
    }
}
