//! Response types for the payroll registry API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from [`PayrollError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::Employee;

/// Body returned for an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// The employee as stored.
    #[serde(flatten)]
    pub employee: Employee,
    /// The employee's computed pay.
    pub salary: Decimal,
    /// The employee's summary line.
    pub summary: String,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            employee: employee.clone(),
            salary: employee.calculate_salary(),
            summary: employee.summary(),
        }
    }
}

/// Body returned by `DELETE /employees/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveEmployeeResponse {
    /// The id that was removed.
    pub id: i32,
    /// Whether any employee was removed.
    pub removed: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response pointing at the offending field.
    pub fn validation_error(message: impl Into<String>, field: &str) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            message,
            format!("Check the '{}' field", field),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: i32) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            "Employee ID not found.",
            format!("No employee with id {} is registered", id),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response with the given status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        if error.is_input_error() {
            let field = error.field().unwrap_or_default();
            return ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(error.to_string(), field),
            );
        }

        ApiErrorResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
        )
    }
}
