use super::segment::Segment;
use crate::recognizer::RecognitionResult;

/// Accumulates finalized transcript segments and the transient interim buffer
///
/// The interim buffer is rebuilt from scratch on every result batch and is
/// never persisted; only finalized segments survive into the export.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Finalized segments, in arrival order
    segments: Vec<Segment>,

    /// Interim text from the most recent batch only
    interim: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all accumulated state, ready for a fresh session
    pub fn reset(&mut self) {
        self.segments.clear();
        self.interim.clear();
    }

    /// Consume one result batch, starting at `result_index`.
    ///
    /// Final results are appended as segments stamped with `elapsed_secs`;
    /// interim results rebuild the interim buffer. Only the top candidate of
    /// each result is used.
    pub fn apply(&mut self, elapsed_secs: f64, results: &[RecognitionResult], result_index: usize) {
        self.interim.clear();

        for result in results.iter().skip(result_index) {
            let text = match result.alternatives.first() {
                Some(candidate) => candidate.transcript.trim(),
                None => continue,
            };

            if result.is_final {
                self.segments.push(Segment::new(elapsed_secs, text));
            } else {
                self.interim.push_str(text);
            }
        }
    }

    /// Composite live display: finalized transcript followed by interim text
    pub fn live_display(&self) -> String {
        let mut display = self.finalized();
        display.push_str(&self.interim);
        display
    }

    /// Finalized transcript only, one `[HH:MM:SS] text` line per segment
    pub fn finalized(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(&segment.display_line());
            out.push('\n');
        }
        out
    }

    /// Finalized segments, in arrival order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Interim text from the most recent batch
    pub fn interim(&self) -> &str {
        &self.interim
    }
}
