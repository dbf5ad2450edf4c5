// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.
//!
//! Every failure is terminal for its request; nothing is retried. Errors
//! serialize as `{"success": false, "error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed client payload or webhook auth failure (400).
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The model call failed or returned unparsable text (500, generic).
    #[error("Generation error: {0}")]
    Generation(String),

    /// The model returned JSON that violates the plan schema (500, with
    /// the field-path-specific validation message).
    #[error("Plan shape error: {0}")]
    PlanShape(String),

    /// Firestore failure (500, detail logged but not surfaced).
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Generation(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::PlanShape(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database error".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = ErrorResponse {
            success: false,
            error,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
