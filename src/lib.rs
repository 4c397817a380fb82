//! Employee administration and payslip engine
//!
//! This crate provides the back office of a small payroll system: admin
//! sign-in, employee and position records, per-day attendance, monthly period
//! navigation, and payslip computation in Indonesian rupiah.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
