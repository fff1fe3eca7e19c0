//! HTTP handlers: control page, static assets and the JSON API.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};

use crate::{infrastructure::dto::http::SpeakerStateDto, ui::state::AppState};

// The control page and its assets, embedded at compile time so the binary
// stays self-contained on the device.
pub const HOME_HTML: &str = include_str!("../../../assets/home.html");
const STYLE_CSS: &str = include_str!("../../../assets/style.css");
const SCRIPT_JS: &str = include_str!("../../../assets/script.js");

pub async fn serve_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS)
}

pub async fn serve_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], SCRIPT_JS)
}

/// Serve the control page for plain (non-upgrade) requests to `/`.
pub fn serve_home() -> Html<&'static str> {
    Html(HOME_HTML)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current speaker state
pub async fn get_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SpeakerStateDto>, StatusCode> {
    let (speaker, now_millis) = state
        .get_speaker_state_usecase
        .execute()
        .await
        .map_err(|e| {
            tracing::error!("Failed to read speaker state: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(SpeakerStateDto::new(speaker, now_millis)))
}
