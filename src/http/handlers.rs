use super::state::AppState;
use crate::recognizer::{RecognizerFactory, RecognizerSource};
use crate::session::{CaptionSession, Controls, SessionConfig, SessionStats};
use crate::subtitle::{SUBTITLE_FILENAME, SUBTITLE_MIME};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StartCaptionRequest {
    /// Optional session ID (if not provided, generate UUID)
    pub session_id: Option<String>,

    /// Language tag passed through to the recognition service
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartCaptionResponse {
    pub session_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StopCaptionResponse {
    pub session_id: String,
    pub status: String,
    pub stats: SessionStats,
}

#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub stats: SessionStats,
    pub controls: Controls,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions/record/start
/// Start a new caption session, or restart an existing one (which resets its
/// transcript)
pub async fn start_caption(
    State(state): State<AppState>,
    Json(req): Json<StartCaptionRequest>,
) -> impl IntoResponse {
    let session_id = req
        .session_id
        .unwrap_or_else(|| format!("caption-{}", uuid::Uuid::new_v4()));
    let language = req
        .language
        .unwrap_or_else(|| state.config.speech.default_language.clone());

    info!("Starting captions for session: {} ({})", session_id, language);

    let existing = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    let session = match existing {
        Some(session) => session,
        None => {
            let config = SessionConfig {
                session_id: session_id.clone(),
                language: language.clone(),
                nats_url: state.config.speech.nats_url.clone(),
            };

            // An unreachable broker means the recognition capability is
            // absent; report it and leave the session uncreated
            let recognizer = match RecognizerFactory::create(
                RecognizerSource::Nats {
                    url: config.nats_url.clone(),
                },
                &session_id,
            )
            .await
            {
                Ok(recognizer) => recognizer,
                Err(e) => {
                    error!("Recognition capability unavailable: {}", e);
                    return (
                        StatusCode::SERVICE_UNAVAILABLE,
                        Json(ErrorResponse {
                            error: format!("Speech recognition unavailable: {}", e),
                        }),
                    )
                        .into_response();
                }
            };

            let session = Arc::new(CaptionSession::new(config, recognizer));

            {
                let mut sessions = state.sessions.write().await;
                sessions.insert(session_id.clone(), Arc::clone(&session));
            }

            session
        }
    };

    if let Err(e) = session.start(&language).await {
        error!("Failed to start captions: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to start captions: {}", e),
            }),
        )
            .into_response();
    }

    info!("Captions started for session: {}", session_id);

    (
        StatusCode::OK,
        Json(StartCaptionResponse {
            session_id: session_id.clone(),
            status: "recording".to_string(),
            message: format!("Captions started for session {}", session_id),
        }),
    )
        .into_response()
}

/// POST /sessions/record/stop/:session_id
/// Stop captioning; the session stays available for transcript and subtitle
/// queries
pub async fn stop_caption(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    info!("Stopping captions for session: {}", session_id);

    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match session {
        Some(session) => match session.stop().await {
            Ok(stats) => (
                StatusCode::OK,
                Json(StopCaptionResponse {
                    session_id,
                    status: "stopped".to_string(),
                    stats,
                }),
            )
                .into_response(),
            Err(e) => {
                error!("Failed to stop captions: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("Failed to stop captions: {}", e),
                    }),
                )
                    .into_response()
            }
        },
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/status
/// Session statistics plus the derived UI control flags
pub async fn session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match session {
        Some(session) => match session.get_stats().await {
            Ok(stats) => (
                StatusCode::OK,
                Json(SessionStatusResponse {
                    session_id,
                    stats,
                    controls: session.controls(),
                }),
            )
                .into_response(),
            Err(e) => {
                error!("Failed to get stats: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("Failed to get stats: {}", e),
                    }),
                )
                    .into_response()
            }
        },
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/live
/// Composite live display: finalized transcript plus interim text
pub async fn live_display(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match session {
        Some(session) => (StatusCode::OK, session.live_display().await).into_response(),
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/transcript
/// Finalized transcript segments as JSON
pub async fn session_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match session {
        Some(session) => (StatusCode::OK, Json(session.get_transcript().await)).into_response(),
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/subtitle
/// Subtitle export of the finalized transcript, offered as a file download
pub async fn download_subtitle(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match session {
        Some(session) => {
            let document = session.export_subtitle().await;

            let headers = [
                (header::CONTENT_TYPE, SUBTITLE_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", SUBTITLE_FILENAME),
                ),
            ];

            (StatusCode::OK, headers, document.into_bytes()).into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn session_not_found(session_id: &str) -> axum::response::Response {
    error!("Session {} not found", session_id);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Session {} not found", session_id),
        }),
    )
        .into_response()
}
