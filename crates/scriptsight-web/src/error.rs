//! Error mapping for the HTTP surface: validation failures become 400,
//! everything else 500. Wrong method on a routed path is axum's own 405.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scriptsight_ai::inference::InferenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("missing upload field `{0}`")]
    MissingField(&'static str),

    #[error("malformed data url")]
    MalformedDataUrl,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::EmptyImage | InferenceError::InvalidImage(_) => {
                AppError::InvalidImage(err.to_string())
            }
            // Checkpoint problems surface at startup; hitting one here is a bug.
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidImage(_)
            | AppError::MissingField(_)
            | AppError::MalformedDataUrl => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected upload");
        }

        (status, self.to_string()).into_response()
    }
}
