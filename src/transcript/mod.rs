//! Transcript assembly
//!
//! This module accumulates recognition results into a timestamped transcript:
//! - `Segment`: one finalized, timestamped line of transcript text
//! - `Transcript`: ordered segments plus the transient interim buffer
//! - Timestamp formatting shared by the live display and the subtitle export

mod segment;
mod transcript;

pub use segment::{format_timestamp, Segment};
pub use transcript::Transcript;
