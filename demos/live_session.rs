// Live Session Example: Captions from the real recognition service
//
// This example drives a caption session against the external recognition
// service over NATS:
// 1. A start command is published for the session
// 2. Recognition events stream back (interim and final results)
// 3. The live display is printed as it evolves
// 4. On stop, the subtitle export is printed
//
// Prerequisites:
// - NATS server running: docker run -p 4222:4222 nats
// - A recognition service publishing speech.event.* subjects
//
// Usage: cargo run --example live_session -- --duration 15 --language en-US

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use subvox::recognizer::{RecognizerFactory, RecognizerSource};
use subvox::{CaptionSession, SessionConfig};
use tokio::time::sleep;
use tracing::info;

#[derive(Parser)]
#[command(name = "live_session")]
#[command(about = "Run a live caption session against the recognition service")]
struct Args {
    /// Duration to caption, in seconds
    #[arg(short, long, default_value = "15")]
    duration: u64,

    /// Language tag passed through to the recognition service
    #[arg(short, long, default_value = "en-US")]
    language: String,

    /// NATS server URL
    #[arg(short, long, default_value = "nats://localhost:4222")]
    nats_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = SessionConfig {
        language: args.language.clone(),
        nats_url: args.nats_url.clone(),
        ..SessionConfig::default()
    };

    info!("Caption session: {}", config.session_id);

    let recognizer = RecognizerFactory::create(
        RecognizerSource::Nats {
            url: args.nats_url.clone(),
        },
        &config.session_id,
    )
    .await?;

    let session = CaptionSession::new(config, recognizer);

    session.start(&args.language).await?;
    info!("Captioning for {} seconds, speak now", args.duration);

    let mut previous_display = String::new();
    for _ in 0..args.duration {
        sleep(Duration::from_secs(1)).await;

        let display_text = session.live_display().await;
        if display_text != previous_display {
            info!("live display:\n{}", display_text);
            previous_display = display_text;
        }

        let stats = session.get_stats().await?;
        if !stats.is_recording {
            info!("Session ended early (error: {:?})", stats.last_error);
            break;
        }
    }

    let stats = session.stop().await?;
    info!(
        "Captioning complete: {} segments in {:.1}s",
        stats.segment_count, stats.duration_secs
    );

    let document = session.export_subtitle().await;
    println!("{}", document.as_str());

    Ok(())
}
