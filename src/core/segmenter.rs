//! Segmenter
//!
//! Splits normalized text into candidate item phrases. Explicit separators
//! always win; without them, word windows are matched greedily against the
//! lexicon, longest window first.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::text_normalizer::TextNormalizer;
use crate::lexicon::Lexicon;

lazy_static! {
    /// Punctuation and spoken connectors between items
    static ref SPOKEN_SEPARATORS: Regex = Regex::new(
        r"(?i)[,;]|\b(?:after that|and then|oh and|and|then|also|plus|next)\b"
    )
    .expect("spoken separator pattern");

    /// Typed lists only use punctuation
    static ref TYPED_SEPARATORS: Regex = Regex::new(r"[,;]").expect("typed separator pattern");
}

/// Bare connector words that are never items on their own
const CONNECTORS: &[&str] = &["and", "then", "also", "plus", "next", "or", "after"];

/// Longest window tried by default
pub const DEFAULT_MAX_WINDOW: usize = 3;

/// Which separator set applies to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorMode {
    /// Speech: punctuation plus spoken connectors
    Spoken,
    /// Manual entry: comma and semicolon only
    Typed,
}

impl SeparatorMode {
    fn pattern(&self) -> &'static Regex {
        match self {
            SeparatorMode::Spoken => &SPOKEN_SEPARATORS,
            SeparatorMode::Typed => &TYPED_SEPARATORS,
        }
    }
}

/// Splits cleaned text into item phrases
pub struct Segmenter {
    lexicon: Arc<Lexicon>,
    normalizer: TextNormalizer,
    max_window: usize,
}

impl Segmenter {
    pub fn new(lexicon: Arc<Lexicon>, max_window: usize) -> Self {
        Self {
            lexicon,
            normalizer: TextNormalizer::new(),
            max_window: max_window.max(1),
        }
    }

    /// Split text into ordered, de-duplicated phrases
    pub fn segment(&self, text: &str, mode: SeparatorMode) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let separators = mode.pattern();
        let phrases = if separators.is_match(text) {
            debug!("Segmenting on separators: '{}'", text);
            separators
                .split(text)
                .map(|piece| piece.trim_matches(|c: char| c.is_whitespace() || ".!?\"".contains(c)))
                .filter(|piece| !piece.is_empty())
                .map(|piece| piece.to_string())
                .collect()
        } else {
            debug!("No separators, matching word windows: '{}'", text);
            self.window_split(text)
        };

        self.post_filter(phrases)
    }

    /// Greedy longest-window matching over the lexicon
    fn window_split(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut phrases = Vec::new();
        let mut pos = 0;

        while pos < words.len() {
            let longest = self.max_window.min(words.len() - pos);
            let size = (1..=longest)
                .rev()
                .find(|&size| self.lexicon.recognizes(&words[pos..pos + size].join(" ")))
                .unwrap_or(1);

            phrases.push(words[pos..pos + size].join(" "));
            pos += size;
        }

        phrases
    }

    fn post_filter(&self, phrases: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        phrases
            .into_iter()
            .filter(|p| p.chars().count() > 1)
            .filter(|p| !self.normalizer.is_filler(p) && !CONNECTORS.contains(&p.as_str()))
            .filter(|p| seen.insert(p.to_lowercase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::new(Arc::new(Lexicon::builtin().unwrap()), DEFAULT_MAX_WINDOW)
    }

    #[test]
    fn test_separator_split() {
        let s = segmenter();
        assert_eq!(
            s.segment("basmati rice, tumeric, and 2 apples", SeparatorMode::Spoken),
            vec!["basmati rice", "tumeric", "2 apples"]
        );
        assert_eq!(
            s.segment("milk; eggs and then bread plus jam", SeparatorMode::Spoken),
            vec!["milk", "eggs", "bread", "jam"]
        );
    }

    #[test]
    fn test_separators_take_precedence_over_windows() {
        let s = segmenter();
        // windowing would have produced "basmati rice"
        assert_eq!(
            s.segment("basmati, rice", SeparatorMode::Spoken),
            vec!["basmati", "rice"]
        );
    }

    #[test]
    fn test_connectors_are_word_bounded() {
        let s = segmenter();
        assert_eq!(
            s.segment("sandwich bread and candy", SeparatorMode::Spoken),
            vec!["sandwich bread", "candy"]
        );
    }

    #[test]
    fn test_longest_window_bias() {
        let s = segmenter();
        assert_eq!(
            s.segment("basmati rice milk", SeparatorMode::Spoken),
            vec!["basmati rice", "milk"]
        );
        assert_eq!(
            s.segment("red chili powder eggs whole milk", SeparatorMode::Spoken),
            vec!["red chili powder", "eggs", "whole milk"]
        );
    }

    #[test]
    fn test_windows_use_aliases() {
        let s = segmenter();
        assert_eq!(
            s.segment("kali mirch tumeric aloo", SeparatorMode::Spoken),
            vec!["kali mirch", "tumeric", "aloo"]
        );
    }

    #[test]
    fn test_unknown_words_fall_back_to_single_words() {
        let s = segmenter();
        assert_eq!(
            s.segment("zorblax milk", SeparatorMode::Spoken),
            vec!["zorblax", "milk"]
        );
    }

    #[test]
    fn test_typed_mode_ignores_spoken_connectors() {
        let s = segmenter();
        assert_eq!(
            s.segment("milk, bread and butter", SeparatorMode::Typed),
            vec!["milk", "bread and butter"]
        );
        // no punctuation: windowed fallback, bare connector dropped
        assert_eq!(
            s.segment("milk and eggs", SeparatorMode::Typed),
            vec!["milk", "eggs"]
        );
    }

    #[test]
    fn test_post_filter() {
        let s = segmenter();
        assert_eq!(
            s.segment("milk, x, Milk, um, the", SeparatorMode::Spoken),
            vec!["milk"]
        );
        assert!(s.segment("", SeparatorMode::Spoken).is_empty());
        assert!(s.segment(" , ; ", SeparatorMode::Spoken).is_empty());
    }
}
