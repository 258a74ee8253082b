//! Mock Speech Engine for Testing
//!
//! Replays a fixed script of transcript events.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use pantryvoice::speech::{TranscriptEvent, TranscriptSource};

/// Scripted transcript source
pub struct MockTranscriptSource {
    events: VecDeque<TranscriptEvent>,
    /// Keep the stream open after the script runs out instead of closing it
    hold_open: bool,
    /// Stall once this many events have been delivered, until `resume` fires
    pause_after: Option<usize>,
    pub resume: Arc<Notify>,
    /// Number of events handed out
    pub delivered: Arc<AtomicUsize>,
}

impl MockTranscriptSource {
    pub fn new(events: Vec<TranscriptEvent>) -> Self {
        Self {
            events: events.into(),
            hold_open: false,
            pause_after: None,
            resume: Arc::new(Notify::new()),
            delivered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Finals for each fragment followed by the engine's end
    pub fn utterance(fragments: &[&str]) -> Self {
        let mut events: Vec<TranscriptEvent> = fragments
            .iter()
            .map(|f| TranscriptEvent::Final(f.to_string()))
            .collect();
        events.push(TranscriptEvent::End);
        Self::new(events)
    }

    /// Deliver `count` events, then wait for `resume` before the rest
    pub fn paused_after(mut self, count: usize) -> Self {
        self.pause_after = Some(count);
        self
    }

    /// Never signal the end; only a user stop finishes the session
    pub fn held_open(mut self) -> Self {
        self.hold_open = true;
        self
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn next_event(&mut self) -> Option<TranscriptEvent> {
        if self.pause_after == Some(self.delivered.load(Ordering::SeqCst)) {
            self.pause_after = None;
            self.resume.notified().await;
        }
        match self.events.pop_front() {
            Some(event) => {
                self.delivered.fetch_add(1, Ordering::SeqCst);
                Some(event)
            }
            None if self.hold_open => std::future::pending().await,
            None => None,
        }
    }
}
