//! Corrector
//!
//! Resolves a candidate phrase to a canonical item name through tiered
//! lookup: exact, localization alias, misspelling alias, then fuzzy
//! similarity. The first tier that matches wins.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::lexicon::{AliasKind, Lexicon};
use crate::utils::fuzzy::best_match;

/// Default exclusive lower bound for fuzzy corrections
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Tolerance for float noise at the threshold and at 1.0
const SCORE_EPSILON: f64 = 1e-9;

/// How certain a resolution is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Which tier produced a correction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversionType {
    Localization,
    Misspelling,
    Fuzzy { score: f64 },
}

impl From<AliasKind> for ConversionType {
    fn from(kind: AliasKind) -> Self {
        match kind {
            AliasKind::Localization => ConversionType::Localization,
            AliasKind::Misspelling => ConversionType::Misspelling,
        }
    }
}

/// Outcome of resolving one phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub original_text: String,
    pub corrected_text: String,
    pub was_corrected: bool,
    pub confidence: Confidence,
    /// Set whenever `was_corrected` is true
    pub conversion: Option<ConversionType>,
}

impl Correction {
    fn unchanged(text: &str, confidence: Confidence) -> Self {
        Self {
            original_text: text.to_string(),
            corrected_text: text.to_string(),
            was_corrected: false,
            confidence,
            conversion: None,
        }
    }

    fn corrected(text: &str, canonical: &str, confidence: Confidence, conversion: ConversionType) -> Self {
        Self {
            original_text: text.to_string(),
            corrected_text: canonical.to_string(),
            was_corrected: true,
            confidence,
            conversion: Some(conversion),
        }
    }
}

/// Tiered phrase resolver over a shared lexicon
pub struct Corrector {
    lexicon: Arc<Lexicon>,
    fuzzy_threshold: f64,
}

impl Corrector {
    pub fn new(lexicon: Arc<Lexicon>, fuzzy_threshold: f64) -> Self {
        Self {
            lexicon,
            fuzzy_threshold,
        }
    }

    /// Resolve one phrase
    pub fn correct(&self, phrase: &str) -> Correction {
        let phrase = phrase.trim();

        if self.lexicon.is_canonical(phrase) {
            return Correction::unchanged(phrase, Confidence::High);
        }

        if let Some(canonical) = self.lexicon.localize(phrase) {
            debug!("Localized '{}' -> '{}'", phrase, canonical);
            return Correction::corrected(
                phrase,
                canonical,
                Confidence::High,
                AliasKind::Localization.into(),
            );
        }

        if let Some(canonical) = self.lexicon.demisspell(phrase) {
            debug!("Fixed misspelling '{}' -> '{}'", phrase, canonical);
            return Correction::corrected(
                phrase,
                canonical,
                Confidence::High,
                AliasKind::Misspelling.into(),
            );
        }

        if let Some(best) = best_match(phrase, self.lexicon.canonical_names()) {
            if best.score > self.fuzzy_threshold + SCORE_EPSILON
                && best.score < 1.0 - SCORE_EPSILON
            {
                debug!(
                    "Fuzzy match '{}' -> '{}' (score {:.3})",
                    phrase, best.value, best.score
                );
                return Correction::corrected(
                    phrase,
                    &best.value,
                    Confidence::Medium,
                    ConversionType::Fuzzy { score: best.score },
                );
            }
        }

        debug!("No lexicon match for '{}'", phrase);
        Correction::unchanged(phrase, Confidence::Low)
    }
}
