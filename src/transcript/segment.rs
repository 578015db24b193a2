use serde::{Deserialize, Serialize};

/// A single finalized line of transcript text
///
/// Immutable once created; segments are appended in arrival order and their
/// offsets are non-decreasing (results arrive chronologically from the
/// recognition service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Seconds since the session started, kept to two-decimal precision
    pub offset_secs: f64,

    /// Transcribed text (trimmed)
    pub text: String,
}

impl Segment {
    pub fn new(offset_secs: f64, text: impl Into<String>) -> Self {
        Self {
            offset_secs: round_to_hundredths(offset_secs),
            text: text.into(),
        }
    }

    /// Timestamp as shown in the transcript and the subtitle export
    ///
    /// Display resolution is whole seconds; the underlying offset keeps its
    /// two-decimal precision.
    pub fn timestamp(&self) -> String {
        format_timestamp(self.offset_secs)
    }

    /// Line form used in the live display: `[HH:MM:SS] text`
    pub fn display_line(&self) -> String {
        format!("[{}] {}", self.timestamp(), self.text)
    }
}

/// Format an offset in seconds as `HH:MM:SS`, truncating sub-second precision
pub fn format_timestamp(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn round_to_hundredths(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}
