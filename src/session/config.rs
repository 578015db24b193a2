use serde::{Deserialize, Serialize};

/// Configuration for a caption session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "caption-2026-08-07-standup")
    pub session_id: String,

    /// Language tag passed through to the recognition service, unvalidated
    pub language: String,

    /// NATS server URL fronting the recognition service
    pub nats_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("caption-{}", uuid::Uuid::new_v4()),
            language: "en-US".to_string(),
            nats_url: "nats://localhost:4222".to_string(),
        }
    }
}
