//! HTTP API module for the payroll registry.
//!
//! This module exposes the registry over REST: submit an employee, remove
//! employees by id, and fetch the plain-text listing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddEmployeeRequest, RawValue};
pub use response::{ApiError, ApiErrorResponse, EmployeeResponse, RemoveEmployeeResponse};
pub use state::AppState;
