use anyhow::{Context, Result};
use clap::Parser;
use subvox::{create_router, AppState, Config};
use tracing::info;

#[derive(Parser)]
#[command(name = "subvox")]
#[command(about = "Live speech-to-subtitle capture service")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(short, long, default_value = "config/subvox")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("subvox v0.1.0");
    info!("Service: {}", cfg.service.name);
    info!("Recognition broker: {}", cfg.speech.nats_url);
    info!("Default language: {}", cfg.speech.default_language);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let state = AppState::new(cfg);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
