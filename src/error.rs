//! Error types for the employee administration backend.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure an admin action can run into: form validation, store
//! conflicts, authentication, and opaque store failures.

use thiserror::Error;

/// The main error type for the employee administration backend.
///
/// All operations return this error type, so the API layer can map every
/// failure onto a single response shape.
///
/// # Example
///
/// ```
/// use employee_admin::error::AppError;
///
/// let error = AppError::PositionInUse {
///     name: "Staff".to_string(),
///     employees: 2,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Position 'Staff' is still assigned to 2 employee(s)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
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

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration: {message}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        message: String,
    },

    /// A submitted form failed validation before reaching the store.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A month/year pair does not describe a calendar month.
    #[error("Invalid period: month {month} of year {year}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested zero-based month.
        month: u32,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: i64,
    },

    /// Another employee already uses the given NIK.
    #[error("An employee with NIK '{nik}' already exists")]
    DuplicateNik {
        /// The conflicting NIK.
        nik: String,
    },

    /// No position exists with the given name.
    #[error("Position not found: {name}")]
    PositionNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A position with the given name already exists.
    #[error("Position '{name}' already exists")]
    DuplicatePosition {
        /// The conflicting name.
        name: String,
    },

    /// A position cannot be deleted while employees still reference it.
    #[error("Position '{name}' is still assigned to {employees} employee(s)")]
    PositionInUse {
        /// The position that was to be deleted.
        name: String,
        /// How many employees still reference it.
        employees: usize,
    },

    /// Login credentials did not match any admin account.
    #[error("Invalid email or password")]
    AuthenticationFailed,

    /// The action requires a signed-in admin.
    #[error("No admin is signed in")]
    NotAuthenticated,

    /// Any other failure reported by the data store.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// The HTTP listener could not be bound or stopped with an error.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Shorthand for a validation failure on `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return AppError.
pub type AppResult<T> = Result<T, AppError>;
