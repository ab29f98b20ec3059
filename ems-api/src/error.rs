//! Error types for ems-api
//!
//! Every failure becomes `{"error": {"code", "message"}}` with a status
//! matching its category. Validation failures also carry per-field detail.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::validation::FieldError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more fields failed validation (422)
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Request body could not be read as the expected JSON shape
    #[error(transparent)]
    Body(#[from] JsonRejection),

    /// Path segment could not be parsed (400)
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Route exists but not for this method (405)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Storage failure (500)
    ///
    /// `action` names what was being attempted; the underlying error is only
    /// logged, never sent to the client.
    #[error("Error {action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: ems_common::Error,
    },
}

impl ApiError {
    /// Wrap a storage error with the action that failed
    pub fn storage(action: &'static str) -> impl FnOnce(ems_common::Error) -> ApiError {
        move |source| ApiError::Storage { action, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, fields) = match self {
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Request validation failed".to_string(),
                Some(fields),
            ),
            ApiError::Body(rejection) => {
                (rejection.status(), "BAD_REQUEST", rejection.body_text(), None)
            }
            ApiError::Path(rejection) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                rejection.body_text(),
                None,
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            ApiError::MethodNotAllowed(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                msg,
                None,
            ),
            ApiError::Storage { action, source } => {
                error!("Error {}: {}", action, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    format!("Error {}", action),
                    None,
                )
            }
        };

        let body = match fields {
            Some(fields) => json!({
                "error": {
                    "code": error_code,
                    "message": message,
                    "fields": fields,
                }
            }),
            None => json!({
                "error": {
                    "code": error_code,
                    "message": message,
                }
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
