pub mod config;
pub mod http;
pub mod nats;
pub mod recognizer;
pub mod session;
pub mod subtitle;
pub mod transcript;

pub use config::Config;
pub use http::{create_router, AppState};
pub use nats::{RecognitionClient, ResultBatchMessage};
pub use recognizer::{
    NatsRecognizer, RecognitionEvent, RecognitionResult, RecognizerFactory, RecognizerSource,
    ResultBatch, ScriptedEvent, ScriptedRecognizer, SpeechRecognizer,
};
pub use session::{CaptionSession, Controls, SessionConfig, SessionStats};
pub use subtitle::{SubtitleDocument, SUBTITLE_FILENAME, SUBTITLE_MIME};
pub use transcript::{format_timestamp, Segment, Transcript};
