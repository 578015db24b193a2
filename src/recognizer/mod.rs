pub mod nats;
pub mod scripted;
pub mod service;

pub use nats::NatsRecognizer;
pub use scripted::{ScriptedEvent, ScriptedRecognizer};
pub use service::{
    RecognitionAlternative, RecognitionEvent, RecognitionResult, RecognizerFactory,
    RecognizerSource, ResultBatch, SpeechRecognizer,
};
