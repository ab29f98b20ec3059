//! Service banner and health check endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

/// Response for `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceBanner {
    pub message: String,
    pub version: String,
    pub health: String,
}

/// GET /
pub async fn service_banner() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: "Employee Management API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        health: "/health".to_string(),
    })
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    /// Absent when the database could not be queried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<i64>,
}

/// GET /health
///
/// 200 with `status: ok` when the database answers, 503 with
/// `status: degraded` otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, label, employee_count) = match ems_common::db::count_employees(&state.db).await {
        Ok(count) => (StatusCode::OK, "ok", Some(count)),
        Err(e) => {
            warn!("Health check database query failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", None)
        }
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            module: "ems-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            employee_count,
        }),
    )
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route(
        "/health",
        get(health_check).fallback(super::method_not_allowed),
    )
}
