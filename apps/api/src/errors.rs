use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required upload part or filename absent. Rejected before any processing.
    #[error("{0}")]
    InputMissing(String),

    /// Multipart body could not be read. Carries the status axum assigns,
    /// e.g. 413 when the body limit is exceeded.
    #[error("Invalid upload: {1}")]
    InvalidUpload(StatusCode, String),

    #[error("Error processing PDF: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::InvalidUpload(e.status(), e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InputMissing(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidUpload(status, _) => (*status, self.to_string()),
            AppError::Extraction(e) => {
                tracing::warn!("Document extraction failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
