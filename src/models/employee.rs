//! Employee model and related types.
//!
//! An [`Employee`] carries a name and an id shared by every kind of worker,
//! plus a [`Compensation`] that decides how the salary is computed.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::format_amount;

/// Selects which kind of compensation an employee receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Paid a fixed monthly amount regardless of hours.
    #[default]
    #[serde(alias = "full_time")]
    Salaried,
    /// Paid per hour worked.
    #[serde(alias = "part_time")]
    Hourly,
}

/// How an employee is paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum Compensation {
    /// A fixed monthly salary.
    #[serde(alias = "full_time")]
    Salaried {
        /// The amount paid each month.
        monthly_salary: Decimal,
    },
    /// Hours worked at an hourly rate.
    #[serde(alias = "part_time")]
    Hourly {
        /// Number of whole hours worked.
        hours_worked: u32,
        /// The amount paid per hour.
        hourly_rate: Decimal,
    },
}

impl Compensation {
    /// Computes the pay for this compensation.
    ///
    /// Hourly pay saturates at [`Decimal::MAX`] instead of overflowing.
    pub fn calculate_salary(&self) -> Decimal {
        match self {
            Compensation::Salaried { monthly_salary } => *monthly_salary,
            Compensation::Hourly {
                hours_worked,
                hourly_rate,
            } => Decimal::from(*hours_worked).saturating_mul(*hourly_rate),
        }
    }

    /// Returns the employment type this compensation belongs to.
    pub fn employment_type(&self) -> EmploymentType {
        match self {
            Compensation::Salaried { .. } => EmploymentType::Salaried,
            Compensation::Hourly { .. } => EmploymentType::Hourly,
        }
    }
}

/// An employee held by the payroll registry.
///
/// Employees are immutable once constructed. Inputs are stored as given;
/// range checks belong to whoever parses user input (see [`crate::input`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    id: i32,
    #[serde(flatten)]
    compensation: Compensation,
}

impl Employee {
    /// Creates an employee with the given compensation.
    pub fn new(name: impl Into<String>, id: i32, compensation: Compensation) -> Self {
        Self {
            name: name.into(),
            id,
            compensation,
        }
    }

    /// Creates a salaried employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_registry::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let alice = Employee::salaried("Alice", 1, Decimal::new(3000, 0));
    /// assert_eq!(alice.calculate_salary(), Decimal::new(3000, 0));
    /// assert_eq!(alice.to_string(), "Employee [Name=Alice, ID=1, Salary=3000.0]");
    /// ```
    pub fn salaried(name: impl Into<String>, id: i32, monthly_salary: Decimal) -> Self {
        Self::new(name, id, Compensation::Salaried { monthly_salary })
    }

    /// Creates an hourly employee.
    pub fn hourly(
        name: impl Into<String>,
        id: i32,
        hours_worked: u32,
        hourly_rate: Decimal,
    ) -> Self {
        Self::new(
            name,
            id,
            Compensation::Hourly {
                hours_worked,
                hourly_rate,
            },
        )
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns how the employee is paid.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Returns the employee's employment type.
    pub fn employment_type(&self) -> EmploymentType {
        self.compensation.employment_type()
    }

    /// Computes the employee's pay.
    pub fn calculate_salary(&self) -> Decimal {
        self.compensation.calculate_salary()
    }

    /// Returns the summary line used in listings.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee [Name={}, ID={}, Salary={}]",
            self.name,
            self.id,
            format_amount(self.calculate_salary())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_salaried_salary_is_monthly_salary() {
        let employee = Employee::salaried("Alice", 1, decimal("3000"));
        assert_eq!(employee.calculate_salary(), decimal("3000"));
    }

    #[test]
    fn test_hourly_salary_is_hours_times_rate() {
        let employee = Employee::hourly("Bob", 2, 40, decimal("25.25"));
        assert_eq!(employee.calculate_salary(), decimal("1010.00"));
    }

    #[test]
    fn test_hourly_with_zero_hours_earns_nothing() {
        let employee = Employee::hourly("Carol", 3, 0, decimal("99.99"));
        assert_eq!(employee.calculate_salary(), Decimal::ZERO);
    }

    #[test]
    fn test_hourly_salary_saturates_instead_of_overflowing() {
        let employee = Employee::hourly("Dave", 4, u32::MAX, Decimal::MAX);
        assert_eq!(employee.calculate_salary(), Decimal::MAX);
    }

    #[test]
    fn test_calculate_salary_is_idempotent() {
        let employee = Employee::hourly("Erin", 5, 7, decimal("13.33"));
        let first = employee.calculate_salary();
        let second = employee.calculate_salary();
        assert_eq!(first, second);
    }

    #[test]
    fn test_accessors() {
        let employee = Employee::hourly("Frank", 42, 10, decimal("20"));
        assert_eq!(employee.name(), "Frank");
        assert_eq!(employee.id(), 42);
        assert_eq!(employee.employment_type(), EmploymentType::Hourly);
        assert_eq!(
            employee.compensation(),
            &Compensation::Hourly {
                hours_worked: 10,
                hourly_rate: decimal("20")
            }
        );
    }

    #[test]
    fn test_summary_for_salaried() {
        let employee = Employee::salaried("Alice", 1, decimal("3000"));
        assert_eq!(
            employee.summary(),
            "Employee [Name=Alice, ID=1, Salary=3000.0]"
        );
    }

    #[test]
    fn test_summary_for_hourly() {
        let employee = Employee::hourly("Bob", 2, 10, decimal("12.75"));
        assert_eq!(
            employee.summary(),
            "Employee [Name=Bob, ID=2, Salary=127.5]"
        );
    }

    #[test]
    fn test_dispatch_through_generic_reference() {
        let staff = [
            Employee::salaried("Alice", 1, decimal("3000")),
            Employee::hourly("Bob", 2, 8, decimal("15")),
        ];
        let total: Decimal = staff.iter().map(Employee::calculate_salary).sum();
        assert_eq!(total, decimal("3120"));
    }

    #[test]
    fn test_serialize_salaried_employee() {
        let employee = Employee::salaried("Alice", 1, decimal("3000"));
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["id"], 1);
        assert_eq!(value["employment_type"], "salaried");
        assert_eq!(value["monthly_salary"], "3000");
    }

    #[test]
    fn test_deserialize_hourly_employee() {
        let json = r#"{
            "name": "Bob",
            "id": 2,
            "employment_type": "hourly",
            "hours_worked": 40,
            "hourly_rate": "25.25"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, Employee::hourly("Bob", 2, 40, decimal("25.25")));
    }

    #[test]
    fn test_deserialize_accepts_legacy_variant_names() {
        let json = r#"{
            "name": "Alice",
            "id": 1,
            "employment_type": "full_time",
            "monthly_salary": "3000"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employment_type(), EmploymentType::Salaried);

        let selector: EmploymentType = serde_json::from_str("\"part_time\"").unwrap();
        assert_eq!(selector, EmploymentType::Hourly);
    }

    #[test]
    fn test_employment_type_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::Salaried).unwrap(),
            "\"salaried\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentType::Hourly).unwrap(),
            "\"hourly\""
        );
    }

    #[test]
    fn test_employment_type_defaults_to_salaried() {
        assert_eq!(EmploymentType::default(), EmploymentType::Salaried);
    }
}
