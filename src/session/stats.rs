use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about a caption session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether recognition is currently active
    pub is_recording: bool,

    /// When the current recording started
    pub started_at: DateTime<Utc>,

    /// Recording duration in seconds (frozen once the session stops)
    pub duration_secs: f64,

    /// Number of finalized transcript segments
    pub segment_count: usize,

    /// Last recognition error code, if any
    pub last_error: Option<String>,
}

/// UI control flags derived from the session state
///
/// Outputs of the state machine, never toggled independently: start and stop
/// mirror the recording state, download is sticky from the first stop on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Controls {
    /// A new recording may be started
    pub start_enabled: bool,

    /// The current recording may be stopped
    pub stop_enabled: bool,

    /// The subtitle export is offered for download
    pub download_enabled: bool,
}
