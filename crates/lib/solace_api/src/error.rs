//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Conflict(m) => (StatusCode::CONFLICT, "conflict", m.as_str()),
            AppError::Internal(m) => {
                // Underlying message goes to the log, never to the caller.
                error!("internal error: {m}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<solace_core::auth::AuthError> for AppError {
    fn from(e: solace_core::auth::AuthError) -> Self {
        match e {
            solace_core::auth::AuthError::Validation(msg) => AppError::Validation(msg),
            solace_core::auth::AuthError::Db(e) => AppError::from(e),
            solace_core::auth::AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<solace_core::wellness::WellnessError> for AppError {
    fn from(e: solace_core::wellness::WellnessError) -> Self {
        match e {
            solace_core::wellness::WellnessError::Validation(msg) => AppError::Validation(msg),
            solace_core::wellness::WellnessError::Db(e) => AppError::from(e),
        }
    }
}

impl From<solace_core::completion::CompletionError> for AppError {
    fn from(e: solace_core::completion::CompletionError) -> Self {
        // Both config and provider faults are server-side: 500 with the
        // detail logged, matching the no-retry terminal-failure contract.
        AppError::Internal(e.to_string())
    }
}
