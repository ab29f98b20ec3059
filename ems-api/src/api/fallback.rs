//! Unmatched path / method handlers
//!
//! Keeps 404 and 405 responses in the same `{"error": {...}}` shape as
//! every other failure.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Router-level fallback for paths with no route
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {} {}", method, uri.path()))
}

/// Method-level fallback for a known path hit with the wrong method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} not allowed on {}", method, uri.path()))
}
