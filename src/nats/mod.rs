pub mod client;
pub mod messages;

pub use client::RecognitionClient;
pub use messages::{
    decode_event, AlternativeMessage, ControlMessage, EndMessage, ErrorMessage, EventEnvelope,
    ResultBatchMessage, ResultMessage,
};
