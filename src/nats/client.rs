use super::messages::{ControlMessage, CONTROL_SUBJECT_PREFIX, EVENT_SUBJECT_WILDCARD};
use anyhow::{Context, Result};
use async_nats::Client;
use tracing::info;

/// Client for the broker fronting the external recognition service
pub struct RecognitionClient {
    client: Client,
    session_id: String,
}

impl RecognitionClient {
    /// Connect to the broker
    pub async fn connect(url: &str, session_id: String) -> Result<Self> {
        info!("Connecting to recognition broker at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to recognition broker")?;

        info!("Connected to recognition broker");

        Ok(Self { client, session_id })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Ask the service to begin recognizing in the given language
    pub async fn publish_start(&self, language: &str) -> Result<()> {
        self.publish_control("start", Some(language.to_string()))
            .await
    }

    /// Ask the service to halt
    pub async fn publish_stop(&self) -> Result<()> {
        self.publish_control("stop", None).await
    }

    async fn publish_control(&self, command: &str, language: Option<String>) -> Result<()> {
        let subject = format!("{}.{}", CONTROL_SUBJECT_PREFIX, self.session_id);

        let message = ControlMessage {
            session_id: self.session_id.clone(),
            command: command.to_string(),
            language,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let payload = serde_json::to_vec(&message)?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .context("Failed to publish control command")?;

        info!("Published {} command to {}", command, subject);

        Ok(())
    }

    /// Subscribe to recognition events
    ///
    /// Events for every session arrive on the wildcard; callers filter by the
    /// `session_id` in the payload.
    pub async fn subscribe_events(&self) -> Result<async_nats::Subscriber> {
        info!("Subscribing to recognition events on {}", EVENT_SUBJECT_WILDCARD);

        let subscriber = self
            .client
            .subscribe(EVENT_SUBJECT_WILDCARD)
            .await
            .context("Failed to subscribe to recognition events")?;

        Ok(subscriber)
    }
}
