//! Payslip calculation.
//!
//! A payslip joins an employee with the position table by position name and
//! applies the fixed health-insurance deduction. The function is pure: callers
//! recompute it whenever the employee, the position table, or the period
//! changes.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use crate::models::{Employee, Payslip, Position};

/// Monthly health-insurance deduction, applied to every payslip.
pub const HEALTH_INSURANCE_DEDUCTION: Decimal = Decimal::from_parts(450_000, 0, 0, false, 0);

/// Looks up the allowance for `position_name`.
///
/// The first position whose name is exactly equal (case-sensitive) wins. An
/// unknown position yields zero rather than an error.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::allowance_for;
/// use employee_admin::models::Position;
/// use rust_decimal::Decimal;
///
/// let positions = vec![Position { name: "Staff".to_string(), allowance: Decimal::from(300_000) }];
/// assert_eq!(allowance_for(&positions, "Staff"), Decimal::from(300_000));
/// assert_eq!(allowance_for(&positions, "staff"), Decimal::ZERO);
/// ```
pub fn allowance_for(positions: &[Position], position_name: &str) -> Decimal {
    positions
        .iter()
        .find(|p| p.name == position_name)
        .map(|p| p.allowance)
        .unwrap_or(Decimal::ZERO)
}

/// Derives the payslip for `employee` in the period named `period_label`.
///
/// - `total_income = base_salary + allowance`
/// - `total_deduction = HEALTH_INSURANCE_DEDUCTION`
/// - `net_pay = total_income - total_deduction`, which may be negative
///
/// Fails with a validation error on `base_salary` if a total leaves the
/// `Decimal` range.
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
/// let positions = vec![Position { name: "Staff".to_string(), allowance: Decimal::from(300_000) }];
///
/// let payslip = compute_payslip(&employee, &positions, "01–31 Januari 2024").unwrap();
/// assert_eq!(payslip.total_income, Decimal::from(3_300_000));
/// assert_eq!(payslip.total_deduction, Decimal::from(450_000));
/// assert_eq!(payslip.net_pay, Decimal::from(2_850_000));
/// ```
pub fn compute_payslip(
    employee: &Employee,
    positions: &[Position],
    period_label: &str,
) -> AppResult<Payslip> {
    let out_of_range = || AppError::validation("base_salary", "payslip totals are out of range");

    let allowance = allowance_for(positions, &employee.position);
    let total_income = employee
        .base_salary
        .checked_add(allowance)
        .ok_or_else(out_of_range)?;
    let total_deduction = HEALTH_INSURANCE_DEDUCTION;
    let net_pay = total_income
        .checked_sub(total_deduction)
        .ok_or_else(out_of_range)?;

    Ok(Payslip {
        period_label: period_label.to_string(),
        employee_id: employee.id,
        nik: employee.nik.clone(),
        name: employee.name.clone(),
        department: employee.department.clone(),
        position: employee.position.clone(),
        base_salary: employee.base_salary,
        allowance,
        health_insurance: HEALTH_INSURANCE_DEDUCTION,
        total_income,
        total_deduction,
        net_pay,
    })
}
