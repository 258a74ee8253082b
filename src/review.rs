//! Review Queue
//!
//! Holds correction suggestions until the user accepts or rejects them,
//! either as a whole batch or one suggestion at a time. Suggestions are keyed
//! by their original text, case-insensitively.

use tracing::{debug, info};

use crate::pipeline::{CorrectionSuggestion, NewItem, Pipeline};

/// Pending correction suggestions in arrival order
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    pending: Vec<CorrectionSuggestion>,
}

impl ReviewQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch; a repeated original replaces the older suggestion
    pub fn extend(&mut self, suggestions: Vec<CorrectionSuggestion>) {
        for suggestion in suggestions {
            if let Some(pos) = self.position(&suggestion.original) {
                debug!("Replacing pending suggestion for '{}'", suggestion.original);
                self.pending.remove(pos);
            }
            self.pending.push(suggestion);
        }
        if !self.pending.is_empty() {
            info!("📋 {} suggestion(s) awaiting review", self.pending.len());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending(&self) -> &[CorrectionSuggestion] {
        &self.pending
    }

    /// Look up a pending suggestion by its original text
    pub fn get(&self, original: &str) -> Option<&CorrectionSuggestion> {
        self.position(original).map(|i| &self.pending[i])
    }

    fn position(&self, original: &str) -> Option<usize> {
        let wanted = original.trim().to_lowercase();
        self.pending
            .iter()
            .position(|s| s.original.trim().to_lowercase() == wanted)
    }

    fn take(&mut self, original: &str) -> Option<CorrectionSuggestion> {
        self.position(original).map(|i| self.pending.remove(i))
    }

    /// Accept every pending suggestion
    pub fn accept_all(&mut self, pipeline: &Pipeline, current_item_texts: &[String]) -> Vec<NewItem> {
        let batch = std::mem::take(&mut self.pending);
        pipeline.accept_suggestions(&batch, current_item_texts)
    }

    /// Reject every pending suggestion
    pub fn reject_all(&mut self, pipeline: &Pipeline, current_item_texts: &[String]) -> Vec<NewItem> {
        let batch = std::mem::take(&mut self.pending);
        pipeline.reject_suggestions(&batch, current_item_texts)
    }

    /// Accept one suggestion; `None` if nothing is pending for `original`
    ///
    /// `Some(None)` means the suggestion was resolved but its text is already
    /// on the list.
    pub fn accept(
        &mut self,
        original: &str,
        pipeline: &Pipeline,
        current_item_texts: &[String],
    ) -> Option<Option<NewItem>> {
        let suggestion = self.take(original)?;
        Some(
            pipeline
                .accept_suggestions(&[suggestion], current_item_texts)
                .pop(),
        )
    }

    /// Reject one suggestion, keeping the original text
    pub fn reject(
        &mut self,
        original: &str,
        pipeline: &Pipeline,
        current_item_texts: &[String],
    ) -> Option<Option<NewItem>> {
        let suggestion = self.take(original)?;
        Some(
            pipeline
                .reject_suggestions(&[suggestion], current_item_texts)
                .pop(),
        )
    }
}
