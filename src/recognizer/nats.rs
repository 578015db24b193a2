use super::service::{RecognitionEvent, SpeechRecognizer};
use crate::nats::{decode_event, RecognitionClient};
use anyhow::{Context, Result};
use futures::stream::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Recognizer backed by the external recognition service over NATS
///
/// A pump task converts wire messages into recognition events on the channel
/// returned from `start`.
pub struct NatsRecognizer {
    client: Arc<RecognitionClient>,
    listening: Arc<AtomicBool>,
    pump_handle: Option<JoinHandle<()>>,
}

impl NatsRecognizer {
    /// Connect to the broker fronting the recognition service
    ///
    /// Connection failure here means the recognition capability is absent for
    /// this process; callers surface that once and keep recording controls
    /// inoperative.
    pub async fn connect(url: &str, session_id: String) -> Result<Self> {
        let client = RecognitionClient::connect(url, session_id).await?;

        Ok(Self {
            client: Arc::new(client),
            listening: Arc::new(AtomicBool::new(false)),
            pump_handle: None,
        })
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for NatsRecognizer {
    async fn start(&mut self, language: &str) -> Result<mpsc::Receiver<RecognitionEvent>> {
        // Replace any pump still running from a previous start
        if let Some(handle) = self.pump_handle.take() {
            handle.abort();
        }

        // Subscribe before requesting start so no event can slip past
        let mut subscriber = self
            .client
            .subscribe_events()
            .await
            .context("Failed to subscribe to recognition events")?;

        self.client
            .publish_start(language)
            .await
            .context("Failed to request recognition start")?;

        self.listening.store(true, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel(64);
        let session_id = self.client.session_id().to_string();
        let listening = Arc::clone(&self.listening);

        let handle = tokio::spawn(async move {
            info!("Recognition event pump started: {}", session_id);

            while let Some(msg) = subscriber.next().await {
                if !listening.load(Ordering::SeqCst) {
                    break;
                }

                let subject: &str = &msg.subject;

                match decode_event(subject, &msg.payload) {
                    Ok(Some(envelope)) => {
                        if envelope.session_id != session_id {
                            continue;
                        }

                        let is_end = matches!(envelope.event, RecognitionEvent::End);

                        if tx.send(envelope.event).await.is_err() {
                            break;
                        }

                        // End is terminal for the stream
                        if is_end {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!("Failed to parse recognition event: {}", e);
                    }
                }
            }

            listening.store(false, Ordering::SeqCst);
            info!("Recognition event pump stopped: {}", session_id);
        });

        self.pump_handle = Some(handle);

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        let was_listening = self.listening.swap(false, Ordering::SeqCst);

        if let Some(handle) = self.pump_handle.take() {
            handle.abort();
        }

        if was_listening {
            self.client
                .publish_stop()
                .await
                .context("Failed to request recognition stop")?;
        }

        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "nats"
    }
}
