// Scripted Session Example: Deterministic caption run without audio hardware
//
// This example walks the full caption pipeline with a scripted recognizer:
// 1. Interim results stream in and update the live display
// 2. Final results become timestamped transcript segments
// 3. The session stops and the subtitle export is written to disk
//
// No broker or microphone is required.
//
// Usage: cargo run --example scripted_session

use anyhow::Result;
use std::time::Duration;
use subvox::recognizer::{
    RecognitionEvent, RecognitionResult, ResultBatch, ScriptedEvent, ScriptedRecognizer,
};
use subvox::{CaptionSession, SessionConfig, SUBTITLE_FILENAME};
use tokio::time::sleep;
use tracing::info;

fn results(result_index: usize, results: Vec<RecognitionResult>) -> RecognitionEvent {
    RecognitionEvent::Results(ResultBatch {
        result_index,
        results,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // A short dictation: two utterances, each previewed by interim results
    let script = vec![
        ScriptedEvent::new(
            Duration::from_millis(300),
            results(0, vec![RecognitionResult::interim_text("Hel")]),
        ),
        ScriptedEvent::new(
            Duration::from_millis(300),
            results(0, vec![RecognitionResult::interim_text("Hello wor")]),
        ),
        ScriptedEvent::new(
            Duration::from_millis(400),
            results(0, vec![RecognitionResult::final_text("Hello world")]),
        ),
        ScriptedEvent::new(
            Duration::from_millis(500),
            results(1, vec![RecognitionResult::interim_text("This is")]),
        ),
        ScriptedEvent::new(
            Duration::from_millis(400),
            results(1, vec![RecognitionResult::final_text("This is a test")]),
        ),
        ScriptedEvent::new(Duration::from_millis(200), RecognitionEvent::End),
    ];

    let recognizer = Box::new(ScriptedRecognizer::new(script));
    let session = CaptionSession::new(SessionConfig::default(), recognizer);

    session.start("en-US").await?;

    // Watch the live display while the script plays out
    for _ in 0..8 {
        sleep(Duration::from_millis(300)).await;
        let display_text = session.live_display().await;
        if !display_text.is_empty() {
            info!("live display:\n{}", display_text);
        }

        let stats = session.get_stats().await?;
        if !stats.is_recording {
            break;
        }
    }

    let stats = session.stop().await?;
    info!(
        "Stopped after {:.1}s with {} segments",
        stats.duration_secs, stats.segment_count
    );

    let document = session.export_subtitle().await;
    println!("{}", document.as_str());

    document.write_to(SUBTITLE_FILENAME)?;
    info!("Saved {}", SUBTITLE_FILENAME);

    Ok(())
}
