use crate::config::Config;
use crate::session::CaptionSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Caption sessions (session_id → session)
    ///
    /// Stopped sessions stay in the map so their frozen transcripts remain
    /// exportable.
    pub sessions: Arc<RwLock<HashMap<String, Arc<CaptionSession>>>>,

    /// Service configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
        }
    }
}
