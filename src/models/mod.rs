//! Core data models for the employee administration backend.
//!
//! This module contains all the domain models shared by the store, the
//! calculations, and the API.

mod admin;
mod amount;
mod attendance;
mod employee;
mod payslip;
mod position;

pub use admin::{AdminAccount, AdminIdentity};
pub use amount::{AmountInput, MAX_AMOUNT, coerce_amount};
pub use attendance::{AttendanceEntry, AttendanceRecord, AttendanceStatus, AttendanceSummary};
pub use employee::{Employee, EmployeeForm, NewEmployee};
pub use payslip::Payslip;
pub use position::{Position, PositionForm};
