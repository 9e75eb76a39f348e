//! HTTP request handlers for the payroll registry API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::input::{EmployeeForm, parse_id};
use crate::models::Employee;

use super::request::AddEmployeeRequest;
use super::response::{ApiError, ApiErrorResponse, EmployeeResponse, RemoveEmployeeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(add_employee_handler),
        )
        .route(
            "/employees/:id",
            get(get_employee_handler).delete(remove_employee_handler),
        )
        .with_state(state)
}

/// Handler for POST /employees.
///
/// Validates the submitted form and appends the employee to the registry.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response();
        }
    };

    let form: EmployeeForm = request.into();
    let employee: Employee = match form.into_employee() {
        Ok(employee) => employee,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee validation failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let body = EmployeeResponse::from(&employee);
    let count = {
        let mut registry = state.registry().write().await;
        registry.add_employee(employee);
        registry.len()
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = body.employee.id(),
        employment_type = ?body.employee.employment_type(),
        salary = %body.salary,
        employee_count = count,
        "Employee added"
    );
    (StatusCode::CREATED, Json(body)).into_response()
}

/// Handler for GET /employees.
///
/// Returns the plain-text listing of every employee.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let (listing, count) = {
        let registry = state.registry().read().await;
        (registry.display_employees(), registry.len())
    };

    info!(
        correlation_id = %correlation_id,
        employee_count = count,
        "Listed employees"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        listing,
    )
        .into_response()
}

/// Handler for GET /employees/:id.
///
/// Returns every employee registered under the id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid employee id");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let matches: Vec<EmployeeResponse> = state
        .registry()
        .read()
        .await
        .find(id)
        .map(EmployeeResponse::from)
        .collect();

    if matches.is_empty() {
        info!(correlation_id = %correlation_id, employee_id = id, "Employee id not found");
        return ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::employee_not_found(id))
            .into_response();
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        matches = matches.len(),
        "Looked up employees by id"
    );
    (StatusCode::OK, Json(matches)).into_response()
}

/// Handler for DELETE /employees/:id.
///
/// Removes every employee registered under the id.
async fn remove_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid employee id");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let removed = state.registry().write().await.remove_employee(id);
    if !removed {
        info!(correlation_id = %correlation_id, employee_id = id, "Employee id not found");
        return ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::employee_not_found(id))
            .into_response();
    }

    info!(correlation_id = %correlation_id, employee_id = id, "Employee removed");
    (StatusCode::OK, Json(RemoveEmployeeResponse { id, removed })).into_response()
}

/// Converts a JSON extraction failure into an API error.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
