//! Transcript Pipeline
//!
//! The synchronous entry points that turn one utterance into list items:
//!
//! ```text
//! raw text -> TextNormalizer -> Segmenter -> [Corrector -> Categorizer] per phrase
//!          -> duplicate filter -> ready items + correction suggestions
//! ```
//!
//! Nothing here performs I/O. The caller supplies the current list texts
//! for duplicate suppression and commits the returned items itself.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::corrector::DEFAULT_FUZZY_THRESHOLD;
use crate::core::segmenter::DEFAULT_MAX_WINDOW;
use crate::core::{
    Categorizer, ConversionType, Correction, Corrector, Segmenter, SeparatorMode, TextNormalizer,
};
use crate::lexicon::{CategoryId, Lexicon, LexiconError};

/// An item ready to be committed to the list store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub text: String,
    pub category: CategoryId,
}

impl NewItem {
    pub fn new(text: &str, category: CategoryId) -> Self {
        Self {
            text: text.to_string(),
            category,
        }
    }
}

/// A correction waiting for the user to accept or reject it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionSuggestion {
    pub original: String,
    pub corrected: String,
    /// Category of the corrected text
    pub category: CategoryId,
    #[serde(default)]
    pub conversion: Option<ConversionType>,
}

impl CorrectionSuggestion {
    pub fn new(original: &str, corrected: &str, category: CategoryId) -> Self {
        Self {
            original: original.to_string(),
            corrected: corrected.to_string(),
            category,
            conversion: None,
        }
    }
}

/// Result of processing one utterance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Uncorrected items, safe to commit right away
    pub ready_items: Vec<NewItem>,
    /// Corrected items awaiting review
    pub suggestions: Vec<CorrectionSuggestion>,
}

impl ProcessOutcome {
    /// True when nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.ready_items.is_empty() && self.suggestions.is_empty()
    }
}

/// Tunables for the text stages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub fuzzy_threshold: f64,
    pub max_window_words: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_window_words: DEFAULT_MAX_WINDOW,
        }
    }
}

/// Case-insensitive exact-text filter seeded from the live list
struct DuplicateFilter {
    seen: HashSet<String>,
}

impl DuplicateFilter {
    fn new(current_item_texts: &[String]) -> Self {
        Self {
            seen: current_item_texts
                .iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
        }
    }

    /// Admit a text once; false if it is already present
    fn admit(&mut self, text: &str) -> bool {
        self.seen.insert(text.trim().to_lowercase())
    }
}

/// The transcript interpretation pipeline
pub struct Pipeline {
    lexicon: Arc<Lexicon>,
    normalizer: TextNormalizer,
    segmenter: Segmenter,
    corrector: Corrector,
    categorizer: Categorizer,
}

impl Pipeline {
    pub fn new(lexicon: Arc<Lexicon>, settings: PipelineSettings) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            segmenter: Segmenter::new(lexicon.clone(), settings.max_window_words),
            corrector: Corrector::new(lexicon.clone(), settings.fuzzy_threshold),
            categorizer: Categorizer::new(lexicon.clone()),
            lexicon,
        }
    }

    /// Pipeline over the built-in lexicon with default settings
    pub fn with_builtin_lexicon() -> Result<Self, LexiconError> {
        Ok(Self::new(
            Arc::new(Lexicon::builtin()?),
            PipelineSettings::default(),
        ))
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Process a spoken utterance
    pub fn process_utterance(&self, raw_text: &str, current_item_texts: &[String]) -> ProcessOutcome {
        self.process(raw_text, current_item_texts, SeparatorMode::Spoken)
    }

    /// Process typed input; only punctuation separates items
    pub fn process_manual(&self, raw_text: &str, current_item_texts: &[String]) -> ProcessOutcome {
        self.process(raw_text, current_item_texts, SeparatorMode::Typed)
    }

    fn process(&self, raw_text: &str, current_item_texts: &[String], mode: SeparatorMode) -> ProcessOutcome {
        let cleaned = self.normalizer.normalize(raw_text);
        if cleaned.is_empty() {
            info!("🔇 No items in utterance: '{}'", raw_text.trim());
            return ProcessOutcome::default();
        }

        let phrases = self.segmenter.segment(&cleaned, mode);
        debug!("Segmented into {:?}", phrases);

        let (ready, corrected): (Vec<Correction>, Vec<Correction>) = phrases
            .iter()
            .map(|phrase| self.corrector.correct(phrase))
            .partition(|c| !c.was_corrected);

        // uncorrected phrases claim their text before any suggestion does
        let mut filter = DuplicateFilter::new(current_item_texts);
        let mut outcome = ProcessOutcome::default();

        for correction in ready {
            if !filter.admit(&correction.corrected_text) {
                debug!("Skipping duplicate '{}'", correction.corrected_text);
                continue;
            }
            let category = self.categorizer.categorize(&correction.corrected_text);
            outcome.ready_items.push(NewItem {
                text: correction.corrected_text,
                category,
            });
        }

        for correction in corrected {
            if !filter.admit(&correction.corrected_text) {
                debug!(
                    "Skipping suggestion '{}' -> '{}', already present",
                    correction.original_text, correction.corrected_text
                );
                continue;
            }
            let category = self.categorizer.categorize(&correction.corrected_text);
            info!(
                "✏️ Suggesting '{}' -> '{}' ({:?})",
                correction.original_text, correction.corrected_text, category
            );
            outcome.suggestions.push(CorrectionSuggestion {
                original: correction.original_text,
                corrected: correction.corrected_text,
                category,
                conversion: correction.conversion,
            });
        }

        info!(
            "🛒 Processed utterance: {} ready, {} to review",
            outcome.ready_items.len(),
            outcome.suggestions.len()
        );
        outcome
    }

    /// Commit corrected texts, re-checking the list as it is now
    pub fn accept_suggestions(
        &self,
        suggestions: &[CorrectionSuggestion],
        current_item_texts: &[String],
    ) -> Vec<NewItem> {
        let mut filter = DuplicateFilter::new(current_item_texts);
        let items: Vec<NewItem> = suggestions
            .iter()
            .filter(|s| filter.admit(&s.corrected))
            .map(|s| NewItem::new(&s.corrected, s.category))
            .collect();

        info!("✅ Accepted {} of {} suggestion(s)", items.len(), suggestions.len());
        items
    }

    /// Commit original texts with a category recomputed from the original
    pub fn reject_suggestions(
        &self,
        suggestions: &[CorrectionSuggestion],
        current_item_texts: &[String],
    ) -> Vec<NewItem> {
        let mut filter = DuplicateFilter::new(current_item_texts);
        let items: Vec<NewItem> = suggestions
            .iter()
            .filter(|s| filter.admit(&s.original))
            .map(|s| NewItem::new(&s.original, self.categorizer.categorize(&s.original)))
            .collect();

        info!("↩️ Kept {} original text(s)", items.len());
        items
    }

    /// Resolve and categorize a single phrase, bypassing segmentation
    pub fn resolve_phrase(&self, phrase: &str) -> (Correction, CategoryId) {
        let correction = self.corrector.correct(&phrase.trim().to_lowercase());
        let category = self.categorizer.categorize(&correction.corrected_text);
        (correction, category)
    }

    /// Category of an arbitrary text
    pub fn categorize(&self, text: &str) -> CategoryId {
        self.categorizer.categorize(text)
    }
}
