use super::service::{RecognitionEvent, SpeechRecognizer};
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// One step of a scripted recognition stream
#[derive(Debug, Clone)]
pub struct ScriptedEvent {
    /// Delay before the event is delivered
    pub after: Duration,
    /// The event to deliver
    pub event: RecognitionEvent,
}

impl ScriptedEvent {
    pub fn new(after: Duration, event: RecognitionEvent) -> Self {
        Self { after, event }
    }

    /// Event delivered without delay
    pub fn immediate(event: RecognitionEvent) -> Self {
        Self {
            after: Duration::ZERO,
            event,
        }
    }
}

/// Deterministic recognizer that replays a scripted event sequence
///
/// Stands in for the platform recognition service in tests and demos; no
/// audio hardware or broker is involved. Each `start` replays the script from
/// the beginning.
pub struct ScriptedRecognizer {
    script: Vec<ScriptedEvent>,
    listening: Arc<AtomicBool>,
    pump_handle: Option<JoinHandle<()>>,
}

impl ScriptedRecognizer {
    pub fn new(script: Vec<ScriptedEvent>) -> Self {
        Self {
            script,
            listening: Arc::new(AtomicBool::new(false)),
            pump_handle: None,
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn start(&mut self, language: &str) -> Result<mpsc::Receiver<RecognitionEvent>> {
        // Replace any replay still in flight from a previous start
        if let Some(handle) = self.pump_handle.take() {
            handle.abort();
        }

        info!("Scripted recognizer starting ({} events, language {})", self.script.len(), language);

        let (tx, rx) = mpsc::channel(32);
        self.listening.store(true, Ordering::SeqCst);

        let script = self.script.clone();
        let listening = Arc::clone(&self.listening);

        let handle = tokio::spawn(async move {
            for step in script {
                if !step.after.is_zero() {
                    tokio::time::sleep(step.after).await;
                }

                if !listening.load(Ordering::SeqCst) {
                    break;
                }

                if tx.send(step.event).await.is_err() {
                    break;
                }
            }

            // Script exhausted: the stream closes when the sender drops
            listening.store(false, Ordering::SeqCst);
        });

        self.pump_handle = Some(handle);

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.listening.store(false, Ordering::SeqCst);

        if let Some(handle) = self.pump_handle.take() {
            handle.abort();
        }

        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
