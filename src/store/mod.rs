//! The data store seam.
//!
//! Every record lives behind [`DataStore`]: employees, positions, attendance,
//! and admin accounts. Callers treat it as an opaque request/response
//! service; each call either completes or fails, with no retries.

mod memory;

pub use memory::InMemoryStore;

use crate::error::AppResult;
use crate::models::{AdminIdentity, AttendanceRecord, Employee, NewEmployee, Position};

/// Operations the application needs from its data store.
pub trait DataStore: Send + Sync {
    /// All employees, ordered by id.
    fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Inserts an employee. Fails with `DuplicateNik` if the NIK is taken.
    fn add_employee(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Replaces the employee with the same id.
    fn update_employee(&self, employee: Employee) -> AppResult<()>;

    /// Removes an employee and their attendance records.
    fn delete_employee(&self, id: i64) -> AppResult<()>;

    /// All positions, ordered by name.
    fn list_positions(&self) -> AppResult<Vec<Position>>;

    /// Inserts a position. Fails with `DuplicatePosition` if the name is taken.
    fn add_position(&self, position: Position) -> AppResult<()>;

    /// Replaces the position currently named `name`; the new record may
    /// carry a different name.
    fn update_position(&self, name: &str, position: Position) -> AppResult<()>;

    /// Removes a position. Fails with `PositionInUse` while any employee
    /// still holds it.
    fn delete_position(&self, name: &str) -> AppResult<()>;

    /// Attendance of one employee in a zero-based month, ordered by date.
    fn list_attendance(&self, employee_id: i64, year: i32, month: u32)
    -> AppResult<Vec<AttendanceRecord>>;

    /// Writes a record, replacing any existing one for the same employee
    /// and date. Fails with `EmployeeNotFound` if the employee does not exist.
    fn upsert_attendance(&self, record: AttendanceRecord) -> AppResult<()>;

    /// Checks admin credentials. Fails with `AuthenticationFailed` on any
    /// mismatch.
    fn admin_login(&self, email: &str, password: &str) -> AppResult<AdminIdentity>;
}
