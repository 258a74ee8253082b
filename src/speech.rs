//! Speech Engine Boundary
//!
//! The speech-to-text engine is external. It delivers [`TranscriptEvent`]s
//! on its own schedule through a [`TranscriptSource`]; [`listen`] pumps
//! those events into a [`VoiceSession`] until the utterance has been
//! processed once.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::pipeline::ProcessOutcome;
pub use crate::session::TranscriptEvent;
use crate::session::VoiceSession;

/// Anything that yields transcript events
///
/// `None` means the engine has gone away, which counts as a natural end.
#[async_trait]
pub trait TranscriptSource: Send {
    async fn next_event(&mut self) -> Option<TranscriptEvent>;
}

/// Transcript source fed through a tokio channel
pub struct ChannelSource {
    rx: mpsc::Receiver<TranscriptEvent>,
}

impl ChannelSource {
    pub fn new(rx: mpsc::Receiver<TranscriptEvent>) -> Self {
        Self { rx }
    }

    /// Create a source together with the sender the engine writes to
    pub fn channel(buffer: usize) -> (mpsc::Sender<TranscriptEvent>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl TranscriptSource for ChannelSource {
    async fn next_event(&mut self) -> Option<TranscriptEvent> {
        self.rx.recv().await
    }
}

/// Run one listening session to completion
///
/// Ends on the engine's end event, on the source closing, or on `stop`
/// firing, whichever comes first. `current_items` is called at processing
/// time so duplicate filtering sees the list as it is then. A dropped stop
/// handle just means the user can no longer stop early.
pub async fn listen<S, F>(
    source: &mut S,
    session: &mut VoiceSession,
    current_items: F,
    mut stop: oneshot::Receiver<()>,
) -> ProcessOutcome
where
    S: TranscriptSource + ?Sized,
    F: Fn() -> Vec<String>,
{
    session.begin_listening();
    let mut stop_open = true;

    loop {
        tokio::select! {
            signal = &mut stop, if stop_open => {
                if signal.is_ok() {
                    info!("⏹️ Listening stopped by user");
                    if let Some(outcome) = session.stop(&current_items()) {
                        return outcome;
                    }
                }
                stop_open = false;
            }
            event = source.next_event() => {
                let event = event.unwrap_or_else(|| {
                    debug!("Transcript source closed");
                    TranscriptEvent::End
                });
                let closed = event == TranscriptEvent::End;
                if let Some(outcome) = session.handle_event(event, &current_items()) {
                    return outcome;
                }
                if closed {
                    return ProcessOutcome::default();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use std::sync::Arc;

    fn session() -> VoiceSession {
        VoiceSession::new(Arc::new(Pipeline::with_builtin_lexicon().unwrap()))
    }

    #[tokio::test]
    async fn test_listen_until_end() {
        let (tx, mut source) = ChannelSource::channel(8);
        tx.send(TranscriptEvent::Final("milk".into())).await.unwrap();
        tx.send(TranscriptEvent::Final("and bread".into())).await.unwrap();
        tx.send(TranscriptEvent::End).await.unwrap();

        let mut session = session();
        let (_stop_tx, stop_rx) = oneshot::channel();
        let outcome = listen(&mut source, &mut session, Vec::new, stop_rx).await;

        let texts: Vec<&str> = outcome.ready_items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["milk", "bread"]);
    }

    #[tokio::test]
    async fn test_closed_source_counts_as_end() {
        let (tx, mut source) = ChannelSource::channel(8);
        tx.send(TranscriptEvent::Final("eggs".into())).await.unwrap();
        drop(tx);

        let mut session = session();
        let (_stop_tx, stop_rx) = oneshot::channel();
        let outcome = listen(&mut source, &mut session, Vec::new, stop_rx).await;
        assert_eq!(outcome.ready_items.len(), 1);
    }

    #[test]
    fn test_stop_before_end() {
        tokio_test::block_on(async {
            let (tx, mut source) = ChannelSource::channel(8);
            let (stop_tx, stop_rx) = oneshot::channel();
            stop_tx.send(()).unwrap();

            let mut session = session();
            let outcome = listen(&mut source, &mut session, Vec::new, stop_rx).await;
            assert!(outcome.is_empty());

            // the engine's late end is swallowed
            tx.send(TranscriptEvent::End).await.unwrap();
            let late = source.next_event().await.unwrap();
            assert!(session.handle_event(late, &[]).is_none());
        });
    }
}
