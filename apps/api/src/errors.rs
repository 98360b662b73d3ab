#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Provider failures never appear here — they are converted into soft 200
/// payloads before the handler returns.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Mirrors the framework-level request-validation shape:
            // a 422 with a bare `detail` message.
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": msg })),
            )
                .into_response(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": {
                            "code": "INTERNAL_ERROR",
                            "message": "An internal server error occurred"
                        }
                    })),
                )
                    .into_response()
            }
        }
    }
}
