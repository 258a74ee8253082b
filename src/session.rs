//! Voice Session
//!
//! Buffers streaming transcript fragments into one utterance and runs the
//! pipeline on it exactly once per listening session, either when the
//! speech engine signals the end or when the user stops first. A stop
//! swallows everything the engine still sends for the same session.
//!
//! ```text
//! Idle ──fragment──▶ Accumulating ──stop / end──▶ Processing ──▶ Idle
//!                                                          └──▶ PendingReview (suggestions queued)
//! PendingReview ──accept/reject all──▶ Idle
//! ```

use std::sync::Arc;
use tracing::{debug, info};

use crate::pipeline::{NewItem, Pipeline, ProcessOutcome};
use crate::review::ReviewQueue;

/// A transcript event from the speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Partial hypothesis, display only
    Interim(String),
    /// Settled text to append to the utterance
    Final(String),
    /// The engine ended the listening session on its own
    End,
}

/// State of a voice session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing buffered, nothing to review
    Idle,
    /// Collecting fragments
    Accumulating,
    /// Running the pipeline over the buffer
    Processing,
    /// Corrections are waiting for the user
    PendingReview,
}

/// Accumulates one utterance at a time and owns the review queue
pub struct VoiceSession {
    pipeline: Arc<Pipeline>,
    state: SessionState,
    buffer: Vec<String>,
    interim: Option<String>,
    /// Set by a user stop; swallows every later event until the next
    /// `begin_listening`
    stopped: bool,
    review: ReviewQueue,
}

impl VoiceSession {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            pipeline,
            state: SessionState::Idle,
            buffer: Vec::new(),
            interim: None,
            stopped: false,
            review: ReviewQueue::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pipeline(&self) -> &Arc<Pipeline> {
        &self.pipeline
    }

    /// Text buffered so far
    pub fn buffered_text(&self) -> String {
        self.buffer.join(" ")
    }

    /// Latest interim hypothesis, for display
    pub fn interim_text(&self) -> Option<&str> {
        self.interim.as_deref()
    }

    pub fn review(&self) -> &ReviewQueue {
        &self.review
    }

    /// Open a new listening session
    pub fn begin_listening(&mut self) {
        debug!("🎙️ Listening session started");
        self.buffer.clear();
        self.interim = None;
        self.stopped = false;
        self.state = self.resting_state();
    }

    /// Feed one engine event; returns an outcome when the buffer was processed
    pub fn handle_event(
        &mut self,
        event: TranscriptEvent,
        current_item_texts: &[String],
    ) -> Option<ProcessOutcome> {
        if self.stopped {
            // the engine may still flush results for a session the user already stopped
            debug!("Ignoring {:?} for session already processed by stop", event);
            return None;
        }

        match event {
            TranscriptEvent::Interim(text) => {
                self.start_accumulating();
                self.interim = Some(text);
                None
            }
            TranscriptEvent::Final(text) => {
                self.start_accumulating();
                self.interim = None;
                let text = text.trim();
                if !text.is_empty() {
                    self.buffer.push(text.to_string());
                }
                None
            }
            TranscriptEvent::End => Some(self.process_buffer(current_item_texts)),
        }
    }

    /// User stop: process now and suppress the engine's end for this session
    ///
    /// Returns `None` if this session was already stopped.
    pub fn stop(&mut self, current_item_texts: &[String]) -> Option<ProcessOutcome> {
        if self.stopped {
            return None;
        }
        self.stopped = true;
        Some(self.process_buffer(current_item_texts))
    }

    /// Typed input skips buffering but feeds the same review queue
    pub fn submit_manual(&mut self, text: &str, current_item_texts: &[String]) -> ProcessOutcome {
        let outcome = self.pipeline.process_manual(text, current_item_texts);
        self.review.extend(outcome.suggestions.clone());
        if self.state != SessionState::Accumulating {
            self.state = self.resting_state();
        }
        outcome
    }

    pub fn accept_all(&mut self, current_item_texts: &[String]) -> Vec<NewItem> {
        let items = self.review.accept_all(&self.pipeline, current_item_texts);
        self.settle();
        items
    }

    pub fn reject_all(&mut self, current_item_texts: &[String]) -> Vec<NewItem> {
        let items = self.review.reject_all(&self.pipeline, current_item_texts);
        self.settle();
        items
    }

    /// Accept a single suggestion by its original text
    pub fn accept(&mut self, original: &str, current_item_texts: &[String]) -> Option<Option<NewItem>> {
        let result = self.review.accept(original, &self.pipeline, current_item_texts);
        self.settle();
        result
    }

    /// Reject a single suggestion by its original text
    pub fn reject(&mut self, original: &str, current_item_texts: &[String]) -> Option<Option<NewItem>> {
        let result = self.review.reject(original, &self.pipeline, current_item_texts);
        self.settle();
        result
    }

    fn start_accumulating(&mut self) {
        if self.state != SessionState::Accumulating {
            debug!("Session {:?} -> Accumulating", self.state);
            self.state = SessionState::Accumulating;
        }
    }

    fn process_buffer(&mut self, current_item_texts: &[String]) -> ProcessOutcome {
        self.state = SessionState::Processing;
        let utterance = self.buffer.join(" ");
        self.buffer.clear();
        self.interim = None;

        info!("🧾 Processing utterance: '{}'", utterance);
        let outcome = self.pipeline.process_utterance(&utterance, current_item_texts);
        self.review.extend(outcome.suggestions.clone());

        self.state = self.resting_state();
        debug!("Session -> {:?}", self.state);
        outcome
    }

    fn settle(&mut self) {
        if self.state == SessionState::PendingReview && self.review.is_empty() {
            self.state = SessionState::Idle;
        }
    }

    fn resting_state(&self) -> SessionState {
        if self.review.is_empty() {
            SessionState::Idle
        } else {
            SessionState::PendingReview
        }
    }
}
