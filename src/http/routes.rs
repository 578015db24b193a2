use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Caption control
        .route("/sessions/record/start", post(handlers::start_caption))
        .route(
            "/sessions/record/stop/:session_id",
            post(handlers::stop_caption),
        )
        // Session queries
        .route(
            "/sessions/:session_id/status",
            get(handlers::session_status),
        )
        .route("/sessions/:session_id/live", get(handlers::live_display))
        .route(
            "/sessions/:session_id/transcript",
            get(handlers::session_transcript),
        )
        .route(
            "/sessions/:session_id/subtitle",
            get(handlers::download_subtitle),
        )
        // Request logging, and CORS for the browser-page consumer
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
