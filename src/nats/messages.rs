use crate::recognizer::{
    RecognitionAlternative, RecognitionEvent, RecognitionResult, ResultBatch,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Subject for control commands, suffixed with the session id
pub const CONTROL_SUBJECT_PREFIX: &str = "speech.control";

/// Wildcard covering every event subject
pub const EVENT_SUBJECT_WILDCARD: &str = "speech.event.>";

/// Subject carrying result batches
pub const RESULT_SUBJECT: &str = "speech.event.result";

/// Subject carrying service errors
pub const ERROR_SUBJECT: &str = "speech.event.error";

/// Subject carrying stream-end notifications
pub const END_SUBJECT: &str = "speech.event.end";

/// Control command published to the recognition service
#[derive(Debug, Serialize, Deserialize)]
pub struct ControlMessage {
    pub session_id: String,
    /// "start" or "stop"
    pub command: String,
    /// Language tag, present on start commands only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// RFC3339 timestamp
    pub timestamp: String,
}

/// Result batch event received from the recognition service
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultBatchMessage {
    pub session_id: String,
    pub result_index: usize,
    pub results: Vec<ResultMessage>,
}

/// One recognition result on the wire
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultMessage {
    #[serde(rename = "final")]
    pub is_final: bool,
    pub alternatives: Vec<AlternativeMessage>,
}

/// One candidate text on the wire
#[derive(Debug, Serialize, Deserialize)]
pub struct AlternativeMessage {
    pub transcript: String,
}

/// Error event received from the recognition service
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub session_id: String,
    /// Service error code, e.g. "no-speech", "not-allowed", "network"
    pub code: String,
}

/// Stream-end event received from the recognition service
#[derive(Debug, Serialize, Deserialize)]
pub struct EndMessage {
    pub session_id: String,
}

impl ResultBatchMessage {
    /// Convert the wire batch into domain results
    pub fn into_batch(self) -> ResultBatch {
        ResultBatch {
            result_index: self.result_index,
            results: self
                .results
                .into_iter()
                .map(|result| RecognitionResult {
                    is_final: result.is_final,
                    alternatives: result
                        .alternatives
                        .into_iter()
                        .map(|alt| RecognitionAlternative {
                            transcript: alt.transcript,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// A decoded recognition event plus the session it belongs to
#[derive(Debug)]
pub struct EventEnvelope {
    pub session_id: String,
    pub event: RecognitionEvent,
}

/// Decode a broker message into a recognition event
///
/// Returns `Ok(None)` for subjects this crate does not consume.
pub fn decode_event(subject: &str, payload: &[u8]) -> Result<Option<EventEnvelope>> {
    match subject {
        RESULT_SUBJECT => {
            let msg: ResultBatchMessage = serde_json::from_slice(payload)?;
            let session_id = msg.session_id.clone();
            Ok(Some(EventEnvelope {
                session_id,
                event: RecognitionEvent::Results(msg.into_batch()),
            }))
        }

        ERROR_SUBJECT => {
            let msg: ErrorMessage = serde_json::from_slice(payload)?;
            Ok(Some(EventEnvelope {
                session_id: msg.session_id,
                event: RecognitionEvent::Error { code: msg.code },
            }))
        }

        END_SUBJECT => {
            let msg: EndMessage = serde_json::from_slice(payload)?;
            Ok(Some(EventEnvelope {
                session_id: msg.session_id,
                event: RecognitionEvent::End,
            }))
        }

        _ => Ok(None),
    }
}
