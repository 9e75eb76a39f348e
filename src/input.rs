//! Parsing of user-supplied text into typed employee values.
//!
//! Front ends collect employee details as raw text. The functions here turn
//! that text into the typed inputs the model expects, reporting a
//! [`PayrollError`] for anything that does not parse. The registry itself
//! never sees unparsed text.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmploymentType};

/// Field name for the employee's name.
pub const FIELD_NAME: &str = "name";
/// Field name for the employee id.
pub const FIELD_ID: &str = "id";
/// Field name for a salaried employee's monthly salary.
pub const FIELD_MONTHLY_SALARY: &str = "monthly_salary";
/// Field name for an hourly employee's hours worked.
pub const FIELD_HOURS_WORKED: &str = "hours_worked";
/// Field name for an hourly employee's rate.
pub const FIELD_HOURLY_RATE: &str = "hourly_rate";

/// Parses an employee name. Surrounding whitespace is removed.
pub fn parse_name(text: &str) -> PayrollResult<String> {
    let name = text.trim();
    if name.is_empty() {
        return Err(missing(FIELD_NAME));
    }
    Ok(name.to_string())
}

/// Parses an employee id.
///
/// # Examples
///
/// ```
/// use payroll_registry::input::parse_id;
///
/// assert_eq!(parse_id(" 42 ").unwrap(), 42);
/// assert!(parse_id("forty-two").is_err());
/// ```
pub fn parse_id(text: &str) -> PayrollResult<i32> {
    let text = text.trim();
    if text.is_empty() {
        return Err(missing(FIELD_ID));
    }
    text.parse::<i32>().map_err(|_| invalid(FIELD_ID, text))
}

/// Parses a non-negative monetary amount for the named field.
pub fn parse_amount(field: &str, text: &str) -> PayrollResult<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return Err(missing(field));
    }
    let amount = Decimal::from_str(text).map_err(|_| invalid(field, text))?;
    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if amount.is_sign_negative() {
        return Err(PayrollError::NegativeValue {
            field: field.to_string(),
            value: text.to_string(),
        });
    }
    Ok(amount)
}

/// Parses a whole, non-negative number of hours.
pub fn parse_hours(text: &str) -> PayrollResult<u32> {
    let text = text.trim();
    if text.is_empty() {
        return Err(missing(FIELD_HOURS_WORKED));
    }
    text.parse::<u32>()
        .map_err(|_| invalid(FIELD_HOURS_WORKED, text))
}

fn missing(field: &str) -> PayrollError {
    PayrollError::MissingField {
        field: field.to_string(),
    }
}

fn invalid(field: &str, text: &str) -> PayrollError {
    PayrollError::InvalidNumber {
        field: field.to_string(),
        value: text.to_string(),
    }
}

/// Raw text of an employee submission.
///
/// Only the fields belonging to the selected employment type are read;
/// the others may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    /// The employee's name.
    #[serde(default)]
    pub name: String,
    /// The employee id as entered.
    #[serde(default)]
    pub id: String,
    /// Which kind of employee to create.
    #[serde(default)]
    pub employment_type: EmploymentType,
    /// Monthly salary, for salaried employees.
    #[serde(default)]
    pub monthly_salary: String,
    /// Hours worked, for hourly employees.
    #[serde(default)]
    pub hours_worked: String,
    /// Hourly rate, for hourly employees.
    #[serde(default)]
    pub hourly_rate: String,
}

impl EmployeeForm {
    /// Validates the form and builds the employee it describes.
    ///
    /// Name and id are checked first, then the fields of the selected
    /// employment type in the order they appear on the form. An hourly
    /// submission whose pay would overflow is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_registry::input::EmployeeForm;
    /// use payroll_registry::models::EmploymentType;
    ///
    /// let form = EmployeeForm {
    ///     name: "Bob".to_string(),
    ///     id: "2".to_string(),
    ///     employment_type: EmploymentType::Hourly,
    ///     hours_worked: "40".to_string(),
    ///     hourly_rate: "25.25".to_string(),
    ///     ..Default::default()
    /// };
    /// let employee = form.into_employee()?;
    /// assert_eq!(employee.to_string(), "Employee [Name=Bob, ID=2, Salary=1010.0]");
    /// # Ok::<(), payroll_registry::error::PayrollError>(())
    /// ```
    pub fn into_employee(self) -> PayrollResult<Employee> {
        let name = parse_name(&self.name)?;
        let id = parse_id(&self.id)?;

        let employee = match self.employment_type {
            EmploymentType::Salaried => {
                let monthly_salary = parse_amount(FIELD_MONTHLY_SALARY, &self.monthly_salary)?;
                Employee::salaried(name, id, monthly_salary)
            }
            EmploymentType::Hourly => {
                let hours_worked = parse_hours(&self.hours_worked)?;
                let hourly_rate = parse_amount(FIELD_HOURLY_RATE, &self.hourly_rate)?;
                if Decimal::from(hours_worked).checked_mul(hourly_rate).is_none() {
                    return Err(PayrollError::AmountOutOfRange {
                        field: FIELD_HOURLY_RATE.to_string(),
                    });
                }
                Employee::hourly(name, id, hours_worked, hourly_rate)
            }
        };

        Ok(employee)
    }
}

impl TryFrom<EmployeeForm> for Employee {
    type Error = PayrollError;

    fn try_from(form: EmployeeForm) -> PayrollResult<Self> {
        form.into_employee()
    }
}
