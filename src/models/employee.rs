//! Employee model and the form used to create or edit one.
//!
//! This module defines the stored [`Employee`] record, the [`NewEmployee`]
//! insert payload, and the [`EmployeeForm`] that is validated before any
//! request reaches the data store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::{AmountInput, lenient_amount};
use crate::error::{AppError, AppResult};

fn default_active() -> bool {
    true
}

/// An employee record as held by the data store.
///
/// `position` is a plain string that is joined against
/// [`Position::name`](super::Position) when a payslip is derived; nothing
/// enforces that a matching position exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: i64,
    /// National identity number, unique across employees.
    pub nik: String,
    /// Full name.
    pub name: String,
    /// Department the employee works in.
    pub department: String,
    /// Position name.
    pub position: String,
    /// Monthly base salary in whole currency units.
    ///
    /// Missing or non-numeric values in a record read as zero.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub base_salary: Decimal,
    /// Whether the employee is currently active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Employee {
    /// Builds a stored record from an insert payload and an assigned id.
    pub fn from_new(id: i64, new: NewEmployee) -> Self {
        Employee {
            id,
            nik: new.nik,
            name: new.name,
            department: new.department,
            position: new.position,
            base_salary: new.base_salary,
            is_active: true,
        }
    }
}

/// Payload for inserting an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// National identity number.
    pub nik: String,
    /// Full name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Position name.
    pub position: String,
    /// Monthly base salary in whole currency units.
    pub base_salary: Decimal,
}

/// Employee data as submitted by the admin.
///
/// Every text field is required; `base_salary` must be a non-negative whole
/// number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForm {
    /// National identity number.
    #[serde(default)]
    pub nik: String,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Position name.
    #[serde(default)]
    pub position: String,
    /// Monthly base salary.
    #[serde(default)]
    pub base_salary: Option<AmountInput>,
}

impl EmployeeForm {
    /// Validates the form and produces an insert payload.
    ///
    /// Text fields are trimmed. The first failing field is reported.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_admin::models::{AmountInput, EmployeeForm};
    ///
    /// let form = EmployeeForm {
    ///     nik: "3201".to_string(),
    ///     name: "Siti".to_string(),
    ///     department: "Finance".to_string(),
    ///     position: "Staff".to_string(),
    ///     base_salary: Some(AmountInput::Text("3000000".to_string())),
    /// };
    /// let new_employee = form.validate().unwrap();
    /// assert_eq!(new_employee.base_salary.to_string(), "3000000");
    /// ```
    pub fn validate(self) -> AppResult<NewEmployee> {
        let nik = required("nik", &self.nik)?;
        let name = required("name", &self.name)?;
        let department = required("department", &self.department)?;
        let position = required("position", &self.position)?;
        let base_salary = self
            .base_salary
            .as_ref()
            .ok_or_else(|| AppError::validation("base_salary", "is required"))?
            .parse_whole("base_salary")?;

        Ok(NewEmployee {
            nik,
            name,
            department,
            position,
            base_salary,
        })
    }
}

/// Trims `value` and rejects it when blank.
pub(crate) fn required(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(field, "is required"));
    }
    Ok(trimmed.to_string())
}
