use super::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use mediatag::{tag_media, MediaDescription, TagResult};
use serde_json::{json, Value};
use tracing::info;

// --- Route Handlers ---

pub async fn root() -> &'static str {
    "mediatag server is running."
}

/// The health check handler.
///
/// Always succeeds, whether or not the model endpoint is reachable; it only
/// reports the configured model and endpoint.
pub async fn health_check(State(app_state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "model": app_state.config.model_name,
        "ollama": app_state.config.ollama_url,
    }))
}

/// The handler for the `/ai/tag` endpoint.
///
/// Runs the whole pipeline for one media item: context build, preview
/// collection, a single outbound model call, tolerant reply extraction, and
/// normalization. Any pipeline failure maps to HTTP 500 via `AppError`.
pub async fn tag_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<MediaDescription>,
) -> Result<Json<TagResult>, AppError> {
    info!(file = %payload.name, file_type = %payload.file_type, "Received tag request");

    let result = tag_media(
        app_state.provider.as_ref(),
        &payload,
        app_state.config.max_frames,
    )
    .await?;

    Ok(Json(result))
}
