//! Employee create/list/delete endpoints

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use ems_common::db::{self, Employee};
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::validation::CreateEmployeeRequest;
use crate::AppState;

/// Response for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: bool,
}

/// POST /employee
///
/// Validates the body before anything reaches storage. Returns 201 with the
/// stored record including its assigned id.
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let Json(request) = payload?;
    let new_employee = request.validate().map_err(ApiError::Validation)?;

    let employee = db::insert_employee(&state.db, &new_employee)
        .await
        .map_err(ApiError::storage("adding employee"))?;

    info!("Created employee {} ({})", employee.id, employee.name);
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /employees
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = db::list_employees(&state.db)
        .await
        .map_err(ApiError::storage("retrieving employees"))?;

    Ok(Json(employees))
}

/// DELETE /employee/:id
///
/// An unknown id is a normal 404, not a failure.
pub async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;

    let deleted = db::delete_employee(&state.db, id)
        .await
        .map_err(ApiError::storage("deleting employee"))?;

    if !deleted {
        return Err(ApiError::NotFound(format!(
            "Employee with ID {} not found",
            id
        )));
    }

    info!("Deleted employee {}", id);
    Ok(Json(DeleteResponse {
        message: format!("Employee with ID {} deleted successfully", id),
        deleted: true,
    }))
}
