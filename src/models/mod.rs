//! Core data models for the payroll registry.

mod amount;
mod employee;

pub use amount::format_amount;
pub use employee::{Compensation, Employee, EmploymentType};
