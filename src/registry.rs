//! The payroll registry.
//!
//! [`PayrollRegistry`] owns every employee added during a session and keeps
//! them in insertion order. Ids are expected to be unique, but nothing
//! enforces it: duplicates may be added, and removal drops every match.

use tracing::debug;

use crate::models::Employee;

/// Message returned by [`PayrollRegistry::display_employees`] when empty.
pub const EMPTY_REGISTRY_MESSAGE: &str = "No employees in the system.\n";

/// An in-memory, insertion-ordered collection of employees.
///
/// The registry is not synchronized. Callers sharing it between tasks must
/// guard it themselves (the HTTP adapter uses a read/write lock).
///
/// # Example
///
/// ```
/// use payroll_registry::models::Employee;
/// use payroll_registry::registry::PayrollRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = PayrollRegistry::new();
/// registry.add_employee(Employee::salaried("Alice", 1, Decimal::new(3000, 0)));
///
/// assert_eq!(
///     registry.display_employees(),
///     "Employee [Name=Alice, ID=1, Salary=3000.0]\n"
/// );
/// assert!(registry.remove_employee(1));
/// assert!(!registry.remove_employee(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollRegistry {
    employees: Vec<Employee>,
}

impl PayrollRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee to the end of the registry.
    pub fn add_employee(&mut self, employee: Employee) {
        debug!(
            employee_id = employee.id(),
            employment_type = ?employee.employment_type(),
            "Adding employee"
        );
        self.employees.push(employee);
    }

    /// Removes every employee with the given id.
    ///
    /// Returns `true` if at least one employee was removed. The relative
    /// order of the remaining employees is unchanged.
    pub fn remove_employee(&mut self, id: i32) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id() != id);
        let removed = before - self.employees.len();
        debug!(employee_id = id, removed, "Removed employees by id");
        removed > 0
    }

    /// Renders every employee's summary line, one per line, in insertion order.
    ///
    /// Each line, including the last, ends with a newline. An empty registry
    /// renders [`EMPTY_REGISTRY_MESSAGE`].
    pub fn display_employees(&self) -> String {
        if self.employees.is_empty() {
            return EMPTY_REGISTRY_MESSAGE.to_string();
        }

        self.employees
            .iter()
            .map(|e| format!("{}\n", e))
            .collect()
    }

    /// Returns the employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns every employee with the given id, in insertion order.
    pub fn find(&self, id: i32) -> impl Iterator<Item = &Employee> + '_ {
        self.employees.iter().filter(move |e| e.id() == id)
    }

    /// Returns the number of employees held.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the registry holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn salaried(name: &str, id: i32, salary: i64) -> Employee {
        Employee::salaried(name, id, Decimal::new(salary, 0))
    }

    fn hourly(name: &str, id: i32, hours: u32, rate: i64) -> Employee {
        Employee::hourly(name, id, hours, Decimal::new(rate, 0))
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = PayrollRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.display_employees(), "No employees in the system.\n");
    }

    #[test]
    fn test_add_then_display_single_employee() {
        let mut registry = PayrollRegistry::new();
        registry.add_employee(salaried("Alice", 1, 3000));
        assert_eq!(
            registry.display_employees(),
            "Employee [Name=Alice, ID=1, Salary=3000.0]\n"
        );
    }

    #[test]
    fn test_display_preserves_insertion_order() {
        let mut registry = PayrollRegistry::new();
        registry.add_employee(hourly("Carol", 30, 10, 20));
        registry.add_employee(salaried("Alice", 1, 3000));
        registry.add_employee(hourly("Bob", 2, 5, 10));

        assert_eq!(
            registry.display_employees(),
            "Employee [Name=Carol, ID=30, Salary=200.0]\n\
             Employee [Name=Alice, ID=1, Salary=3000.0]\n\
             Employee [Name=Bob, ID=2, Salary=50.0]\n"
        );
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let mut registry = PayrollRegistry::new();
        registry.add_employee(salaried("Alice", 7, 3000));
        registry.add_employee(hourly("Bob", 7, 10, 15));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find(7).count(), 2);
    }

    #[test]
    fn test_remove_drops_all_matching_ids() {
        let mut registry = PayrollRegistry::new();
        registry.add_employee(salaried("Alice", 7, 3000));
        registry.add_employee(salaried("Bob", 8, 2000));
        registry.add_employee(hourly("Carol", 7, 10, 15));

        assert!(registry.remove_employee(7));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.employees()[0].name(), "Bob");
        assert!(!registry.remove_employee(7));
    }

    #[test]
    fn test_remove_unknown_id_leaves_registry_unchanged() {
        let mut registry = PayrollRegistry::new();
        registry.add_employee(salaried("Alice", 1, 3000));
        registry.add_employee(salaried("Bob", 2, 2000));
        let before = registry.employees().to_vec();

        assert!(!registry.remove_employee(99));
        assert_eq!(registry.employees(), before.as_slice());
    }

    #[test]
    fn test_remove_keeps_order_of_remaining() {
        let mut registry = PayrollRegistry::new();
        for (name, id) in [("A", 1), ("B", 2), ("C", 3), ("D", 2), ("E", 4)] {
            registry.add_employee(salaried(name, id, 100));
        }

        assert!(registry.remove_employee(2));
        let names: Vec<&str> = registry.employees().iter().map(Employee::name).collect();
        assert_eq!(names, vec!["A", "C", "E"]);
    }

    #[test]
    fn test_removing_last_employee_restores_empty_message() {
        let mut registry = PayrollRegistry::new();
        registry.add_employee(salaried("Alice", 1, 3000));
        assert!(registry.remove_employee(1));
        assert_eq!(registry.display_employees(), EMPTY_REGISTRY_MESSAGE);
    }

    #[test]
    fn test_display_has_no_side_effects() {
        let mut registry = PayrollRegistry::new();
        registry.add_employee(hourly("Bob", 2, 5, 10));
        let first = registry.display_employees();
        let second = registry.display_employees();
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_unknown_id_is_empty() {
        let registry = PayrollRegistry::new();
        assert_eq!(registry.find(1).count(), 0);
    }
}
