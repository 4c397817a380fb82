//! Business rules for the employee administration backend.
//!
//! This module holds the pure computations: reporting period navigation and
//! month calendars, payslip derivation, attendance status rules, and rupiah
//! formatting. None of it touches the data store.

mod attendance;
mod currency;
mod payslip;
mod period;

pub use attendance::{CalendarCell, attendance_calendar, record_status, status_on, summarize};
pub use currency::{CURRENCY_PREFIX, format_rupiah};
pub use payslip::{HEALTH_INSURANCE_DEDUCTION, allowance_for, compute_payslip};
pub use period::{
    DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, Direction, MONTH_NAMES, PeriodBounds, PeriodNavigator,
    days_in_month, month_grid, month_range, period_label, weekday_offset,
};
