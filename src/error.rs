//! Error types for the payroll registry.
//!
//! The registry and employee model never fail; these errors come from the
//! edges of the system: parsing user-supplied text and loading configuration.

use thiserror::Error;

/// The main error type for the payroll registry.
///
/// # Example
///
/// ```
/// use payroll_registry::error::PayrollError;
///
/// let error = PayrollError::MissingField {
///     field: "name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: name");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// A required text field was empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the empty field.
        field: String,
    },

    /// A field that must be numeric could not be parsed.
    #[error("Invalid {field} '{value}': must be a number")]
    InvalidNumber {
        /// The name of the field.
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A numeric field held a negative value.
    #[error("Invalid {field} '{value}': must not be negative")]
    NegativeValue {
        /// The name of the field.
        field: String,
        /// The raw text that was rejected.
        value: String,
    },

    /// A value parsed, but the pay it produces cannot be represented.
    #[error("Invalid {field}: resulting pay is out of range")]
    AmountOutOfRange {
        /// The name of the field that pushed the pay out of range.
        field: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns the name of the input field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            PayrollError::MissingField { field }
            | PayrollError::InvalidNumber { field, .. }
            | PayrollError::NegativeValue { field, .. }
            | PayrollError::AmountOutOfRange { field } => Some(field),
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => None,
        }
    }

    /// Returns true if the error was caused by invalid user input.
    pub fn is_input_error(&self) -> bool {
        self.field().is_some()
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
