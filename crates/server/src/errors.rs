use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mediatag::TagError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Every failure mode of the tagging pipeline collapses to one HTTP 500
/// response whose body carries the underlying cause; there is no retry and
/// no fallback model.
pub enum AppError {
    /// Errors originating from the tagging pipeline.
    Tag(TagError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<TagError> for AppError {
    fn from(err: TagError) -> Self {
        AppError::Tag(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match self {
            AppError::Tag(err) => {
                error!("TagError: {err:?}");
                format!("vision model error: {err}")
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                format!("internal error: {err}")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
