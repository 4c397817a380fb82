//! Attendance (presensi) records.
//!
//! An employee has at most one [`AttendanceStatus`] per calendar day. Writing
//! a status for a day replaces whatever was there before.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The status recorded for an employee on one day.
///
/// Serialized in snake case. The Indonesian spellings used by older store
/// rows (`hadir`, `sakit`, `cuti`, `absen`) are accepted on input.
///
/// # Example
///
/// ```
/// use employee_admin::models::AttendanceStatus;
///
/// let status: AttendanceStatus = serde_json::from_str("\"cuti\"").unwrap();
/// assert_eq!(status, AttendanceStatus::Leave);
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"leave\"");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// At work. Also the default shown for a day with no record.
    #[default]
    #[serde(alias = "hadir")]
    Present,
    /// Off sick.
    #[serde(alias = "sakit")]
    Sick,
    /// On leave.
    #[serde(alias = "cuti")]
    Leave,
    /// Absent without leave.
    #[serde(alias = "absen")]
    Absent,
}

impl AttendanceStatus {
    /// All statuses in display order.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Sick,
        AttendanceStatus::Leave,
        AttendanceStatus::Absent,
    ];
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Sick => write!(f, "sick"),
            AttendanceStatus::Leave => write!(f, "leave"),
            AttendanceStatus::Absent => write!(f, "absent"),
        }
    }
}

/// The stored status of one employee on one day, keyed by
/// `(employee_id, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: i64,
    /// The calendar day.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}

/// A status submission as it comes from the attendance view.
///
/// Either key may be missing when the admin has not picked an employee or a
/// day yet; [`record_status`](crate::calculation::record_status) rejects those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The selected employee, if any.
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// The selected day, if any.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The chosen status. Required: present is only a display default for
    /// days with no record.
    pub status: AttendanceStatus,
}

/// Per-status day counts for one employee and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days marked present.
    pub total_present: u32,
    /// Days marked sick.
    pub total_sick: u32,
    /// Days marked leave.
    pub total_leave: u32,
    /// Days marked absent.
    pub total_absent: u32,
}
