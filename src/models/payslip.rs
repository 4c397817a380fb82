//! The derived payslip (slip gaji).
//!
//! A payslip is never stored. It is recomputed from the current employee
//! record and position table every time it is shown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monthly payslip for one employee.
///
/// `net_pay` always equals `total_income - total_deduction`.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::compute_payslip;
/// use employee_admin::models::{Employee, Position};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     nik: "3201".to_string(),
///     name: "Siti".to_string(),
///     department: "Finance".to_string(),
///     position: "Staff".to_string(),
///     base_salary: Decimal::from(3_000_000),
///     is_active: true,
/// };
/// let positions = vec![Position {
///     name: "Staff".to_string(),
///     allowance: Decimal::from(300_000),
/// }];
///
/// let payslip = compute_payslip(&employee, &positions, "01–31 Januari 2024").unwrap();
/// assert_eq!(payslip.net_pay, payslip.total_income - payslip.total_deduction);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Human-readable period, e.g. "01–31 Januari 2024".
    pub period_label: String,
    /// Store identifier of the employee.
    pub employee_id: i64,
    /// National identity number.
    pub nik: String,
    /// Employee name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Position name as recorded on the employee.
    pub position: String,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Position allowance, zero when the position has no master entry.
    pub allowance: Decimal,
    /// Health-insurance deduction.
    pub health_insurance: Decimal,
    /// Base salary plus allowance.
    pub total_income: Decimal,
    /// Sum of all deductions.
    pub total_deduction: Decimal,
    /// Take-home pay (gaji bersih).
    pub net_pay: Decimal,
}
