use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::distance::gateway::ConversionError;

/// Application-level error type for service routes.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// The conversion endpoint answers errors with a bare JSON string, not the
/// `{"error": ...}` envelope above. Clients match on the exact text.
impl IntoResponse for ConversionError {
    fn into_response(self) -> Response {
        match &self {
            ConversionError::Validation(e) => {
                tracing::warn!("Conversion rejected: {e}");
                (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response()
            }
            ConversionError::Internal(msg) => {
                tracing::error!("Conversion error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json("An internal conversion error occurred".to_string()),
                )
                    .into_response()
            }
        }
    }
}
