//! ems-api library - Employee Management HTTP service
//!
//! Validates incoming payloads, calls the storage operations in
//! `ems_common::db`, and maps outcomes to status codes and JSON bodies.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod validation;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    // Browser UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::service_banner).fallback(api::method_not_allowed))
        .route(
            "/employee",
            post(api::create_employee).fallback(api::method_not_allowed),
        )
        .route(
            "/employees",
            get(api::list_employees).fallback(api::method_not_allowed),
        )
        .route(
            "/employee/:id",
            delete(api::delete_employee).fallback(api::method_not_allowed),
        )
        .route(
            "/stats/median-age",
            get(api::median_age).fallback(api::method_not_allowed),
        )
        .route(
            "/stats/median-salary",
            get(api::median_salary).fallback(api::method_not_allowed),
        )
        .merge(api::health_routes())
        .fallback(api::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
