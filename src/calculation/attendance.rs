//! Attendance status rules.
//!
//! Statuses have no transitions to guard: picking a status for a day simply
//! replaces the old one. What is checked is that an employee and a day were
//! actually selected before anything is written.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::period::month_grid;
use crate::error::{AppError, AppResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary};

/// Validates a status submission into a record ready for upsert.
///
/// Fails when no employee or no date is selected. Any status is accepted for
/// any date.
///
/// # Example
///
/// ```
/// use employee_admin::calculation::record_status;
/// use employee_admin::models::AttendanceStatus;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 3);
/// assert!(record_status(Some(1), date, AttendanceStatus::Sick).is_ok());
/// assert!(record_status(None, date, AttendanceStatus::Sick).is_err());
/// assert!(record_status(Some(1), None, AttendanceStatus::Sick).is_err());
/// ```
pub fn record_status(
    employee_id: Option<i64>,
    date: Option<NaiveDate>,
    status: AttendanceStatus,
) -> AppResult<AttendanceRecord> {
    let employee_id =
        employee_id.ok_or_else(|| AppError::validation("employee_id", "no employee selected"))?;
    let date = date.ok_or_else(|| AppError::validation("date", "no date selected"))?;

    Ok(AttendanceRecord {
        employee_id,
        date,
        status,
    })
}

/// The status to show for `date`, defaulting to present when nothing is
/// recorded.
pub fn status_on(records: &[AttendanceRecord], date: NaiveDate) -> AttendanceStatus {
    records
        .iter()
        .find(|r| r.date == date)
        .map(|r| r.status)
        .unwrap_or_default()
}

/// Counts recorded days per status.
pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
    records
        .iter()
        .fold(AttendanceSummary::default(), |mut summary, record| {
            match record.status {
                AttendanceStatus::Present => summary.total_present += 1,
                AttendanceStatus::Sick => summary.total_sick += 1,
                AttendanceStatus::Leave => summary.total_leave += 1,
                AttendanceStatus::Absent => summary.total_absent += 1,
            }
            summary
        })
}

/// One cell of an attendance calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day of month, `None` for leading blanks.
    pub day: Option<u32>,
    /// Recorded status for that day, `None` when nothing is recorded.
    pub status: Option<AttendanceStatus>,
}

/// The month grid of a zero-based month with each day's recorded status.
///
/// Records outside the month are ignored.
pub fn attendance_calendar(
    year: i32,
    month: u32,
    records: &[AttendanceRecord],
) -> AppResult<Vec<CalendarCell>> {
    let in_month: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month0() == month)
        .collect();

    let cells = month_grid(year, month)?
        .into_iter()
        .map(|day| CalendarCell {
            day,
            status: day.and_then(|d| {
                in_month
                    .iter()
                    .find(|r| r.date.day() == d)
                    .map(|r| r.status)
            }),
        })
        .collect();

    Ok(cells)
}
