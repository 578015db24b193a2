//! HTTP API server for the consuming UI
//!
//! This module provides a REST API for controlling caption sessions:
//! - POST /sessions/record/start - Start (or restart) a caption session
//! - POST /sessions/record/stop/:id - Stop a session
//! - GET /sessions/:id/status - Query session stats and derived controls
//! - GET /sessions/:id/live - Live display (finalized + interim text)
//! - GET /sessions/:id/transcript - Finalized segments as JSON
//! - GET /sessions/:id/subtitle - Subtitle file download
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
