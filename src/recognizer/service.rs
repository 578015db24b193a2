use anyhow::Result;
use tokio::sync::mpsc;

/// One candidate text for a recognition result
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    /// Candidate transcript text
    pub transcript: String,
}

/// One recognition result from the platform service
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    /// Whether the service will revise this result further
    pub is_final: bool,
    /// Candidate texts, best first (only the top candidate is consumed)
    pub alternatives: Vec<RecognitionAlternative>,
}

impl RecognitionResult {
    /// Single-candidate final result
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            is_final: true,
            alternatives: vec![RecognitionAlternative {
                transcript: text.into(),
            }],
        }
    }

    /// Single-candidate interim result
    pub fn interim_text(text: impl Into<String>) -> Self {
        Self {
            is_final: false,
            alternatives: vec![RecognitionAlternative {
                transcript: text.into(),
            }],
        }
    }
}

/// An ordered batch of recognition results
///
/// Results before `result_index` were already delivered in earlier batches and
/// must not be reprocessed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBatch {
    /// Index of the first new or revised result
    pub result_index: usize,
    /// The full ordered result list
    pub results: Vec<RecognitionResult>,
}

/// Event delivered by the recognition service
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// New or revised recognition results
    Results(ResultBatch),
    /// Runtime service error (e.g. "no-speech", "not-allowed", "network")
    Error { code: String },
    /// The service terminated the stream (explicit stop, network loss, timeout)
    End,
}

/// Speech recognition capability
///
/// Implementations:
/// - NATS: external recognition service reached over the broker
/// - Scripted: deterministic event replay (for testing and demos)
///
/// `start`/`stop` only issue requests and return immediately; recognition
/// happens out-of-process and events arrive later on the channel.
#[async_trait::async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Ask the service to begin producing events in the given language
    ///
    /// The language tag is passed through unvalidated. Returns a channel
    /// receiver that will receive recognition events.
    async fn start(&mut self, language: &str) -> Result<mpsc::Receiver<RecognitionEvent>>;

    /// Ask the service to halt
    async fn stop(&mut self) -> Result<()>;

    /// Check if the recognizer currently has an active event stream
    fn is_listening(&self) -> bool;

    /// Recognizer name for logging
    fn name(&self) -> &str;
}

/// Recognizer factory
pub struct RecognizerFactory;

impl RecognizerFactory {
    /// Create a recognizer for the given event source
    ///
    /// For the NATS source, an unreachable broker here means the recognition
    /// capability is absent; no recording operation can function until a new
    /// create succeeds.
    pub async fn create(
        source: RecognizerSource,
        session_id: &str,
    ) -> Result<Box<dyn SpeechRecognizer>> {
        match source {
            RecognizerSource::Nats { url } => {
                let recognizer =
                    super::nats::NatsRecognizer::connect(&url, session_id.to_string()).await?;
                Ok(Box::new(recognizer))
            }

            RecognizerSource::Scripted(script) => {
                Ok(Box::new(super::scripted::ScriptedRecognizer::new(script)))
            }
        }
    }
}

/// Recognition event source
#[derive(Debug, Clone)]
pub enum RecognizerSource {
    /// External recognition service over NATS
    Nats { url: String },
    /// Pre-scripted events (for testing and demos)
    Scripted(Vec<super::scripted::ScriptedEvent>),
}
