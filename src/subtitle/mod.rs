//! Subtitle-file rendering
//!
//! Renders the finalized transcript into the sequential subtitle format the
//! service exports: a 1-based index line, a `HH:MM:SS text` line, and a blank
//! separator per segment. Blocks carry a single timestamp and no end-time
//! field, so the output resembles but does not fully conform to standard
//! timed-subtitle formats. Kept as produced; see DESIGN.md.

use crate::transcript::Segment;
use anyhow::{Context, Result};
use std::path::Path;

/// Filename offered to the consumer for download
pub const SUBTITLE_FILENAME: &str = "transcription.srt";

/// MIME type of the exported file
pub const SUBTITLE_MIME: &str = "text/plain";

/// A rendered subtitle document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleDocument {
    content: String,
}

impl SubtitleDocument {
    /// Render finalized segments into sequential subtitle blocks
    ///
    /// Pure function of the segments: interim text never reaches this layer,
    /// and an empty transcript renders as an empty document.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut content = String::new();

        for (index, segment) in segments.iter().enumerate() {
            let block = format!(
                "{}\n{} {}\n\n",
                index + 1,
                segment.timestamp(),
                segment.text
            );
            content.push_str(&block);
        }

        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Document bytes for the download response
    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }

    /// Save the document to disk
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        std::fs::write(path, &self.content)
            .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

        Ok(())
    }
}
