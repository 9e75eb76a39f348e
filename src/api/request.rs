//! Request types for the payroll registry API.
//!
//! This module defines the JSON request structure for `POST /employees`.

use serde::{Deserialize, Serialize};

use crate::input::EmployeeForm;
use crate::models::EmploymentType;

/// A field value as sent by a client.
///
/// Form-based clients send text; JSON clients may send plain numbers. Both
/// are reduced to text and validated the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A text value.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl RawValue {
    /// Returns the value as text.
    pub fn into_text(self) -> String {
        match self {
            RawValue::Text(text) => text,
            RawValue::Number(number) => number.to_string(),
        }
    }
}

fn text_or_empty(value: Option<RawValue>) -> String {
    value.map(RawValue::into_text).unwrap_or_default()
}

/// Request body for the `POST /employees` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddEmployeeRequest {
    /// The employee's name.
    #[serde(default)]
    pub name: Option<String>,
    /// The employee id.
    #[serde(default)]
    pub id: Option<RawValue>,
    /// Which kind of employee to create; salaried when omitted.
    #[serde(default)]
    pub employment_type: EmploymentType,
    /// Monthly salary, for salaried employees.
    #[serde(default)]
    pub monthly_salary: Option<RawValue>,
    /// Hours worked, for hourly employees.
    #[serde(default)]
    pub hours_worked: Option<RawValue>,
    /// Hourly rate, for hourly employees.
    #[serde(default)]
    pub hourly_rate: Option<RawValue>,
}

impl From<AddEmployeeRequest> for EmployeeForm {
    fn from(req: AddEmployeeRequest) -> Self {
        EmployeeForm {
            name: req.name.unwrap_or_default(),
            id: text_or_empty(req.id),
            employment_type: req.employment_type,
            monthly_salary: text_or_empty(req.monthly_salary),
            hours_worked: text_or_empty(req.hours_worked),
            hourly_rate: text_or_empty(req.hourly_rate),
        }
    }
}
