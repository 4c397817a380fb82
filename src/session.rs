//! The admin session.
//!
//! A [`Session`] is the state behind the admin's screen: who is signed in,
//! which period is selected, and the employee and position lists last fetched
//! from the store. Every mutation goes to the store first; only when it
//! succeeds are the cached lists rebuilt, wholesale, from a fresh fetch.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::{
    CalendarCell, Direction, PeriodNavigator, attendance_calendar, compute_payslip, month_grid,
    record_status, status_on, summarize,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    AdminIdentity, AttendanceEntry, AttendanceRecord, AttendanceSummary, Employee, EmployeeForm,
    Payslip, Position, PositionForm,
};
use crate::store::DataStore;

/// The selected reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodView {
    /// Selected year.
    pub year: i32,
    /// Selected zero-based month.
    pub month: u32,
    /// Label such as "01–31 Januari 2024".
    pub label: String,
}

/// Month grid of the selected period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarView {
    /// The period shown.
    pub period: PeriodView,
    /// Leading blanks (`None`) followed by day numbers, Monday first.
    pub cells: Vec<Option<u32>>,
}

/// One employee's attendance in the selected period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceView {
    /// The period shown.
    pub period: PeriodView,
    /// The employee.
    pub employee_id: i64,
    /// Stored records, ordered by date.
    pub records: Vec<AttendanceRecord>,
    /// Month grid annotated with the recorded statuses.
    pub calendar: Vec<CalendarCell>,
}

/// State of one admin's session.
pub struct Session {
    store: Arc<dyn DataStore>,
    navigator: PeriodNavigator,
    admin: Option<AdminIdentity>,
    employees: Vec<Employee>,
    positions: Vec<Position>,
}

impl Session {
    /// Creates a signed-out session over `store`.
    pub fn new(store: Arc<dyn DataStore>, navigator: PeriodNavigator) -> Self {
        Self {
            store,
            navigator,
            admin: None,
            employees: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Signs an admin in and loads the cached lists.
    ///
    /// The session only counts as signed in once both lists are loaded.
    pub fn login(&mut self, email: &str, password: &str) -> AppResult<AdminIdentity> {
        let admin = self
            .store
            .admin_login(email, password)
            .inspect_err(|e| warn!(error = %e, "Admin login rejected"))?;

        let (employees, positions) = self.fetch_lists()?;
        self.employees = employees;
        self.positions = positions;
        self.admin = Some(admin.clone());
        info!(email = %admin.email, "Admin signed in");
        Ok(admin)
    }

    /// Signs out and drops the cached lists.
    pub fn logout(&mut self) {
        if let Some(admin) = self.admin.take() {
            info!(email = %admin.email, "Admin signed out");
        }
        self.employees.clear();
        self.positions.clear();
    }

    /// The signed-in admin, if any.
    pub fn admin(&self) -> Option<&AdminIdentity> {
        self.admin.as_ref()
    }

    fn require_admin(&self) -> AppResult<&AdminIdentity> {
        self.admin.as_ref().ok_or(AppError::NotAuthenticated)
    }

    /// Re-fetches employees and positions.
    ///
    /// Both lists are fetched before either cache is replaced, so a failed
    /// fetch leaves the previous lists in place.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.require_admin()?;
        let (employees, positions) = self.fetch_lists()?;
        self.employees = employees;
        self.positions = positions;
        Ok(())
    }

    fn fetch_lists(&self) -> AppResult<(Vec<Employee>, Vec<Position>)> {
        Ok((self.store.list_employees()?, self.store.list_positions()?))
    }

    /// Runs a store mutation and rebuilds the caches when it succeeds.
    fn mutate<T>(
        &mut self,
        action: &'static str,
        op: impl FnOnce(&dyn DataStore) -> AppResult<T>,
    ) -> AppResult<T> {
        self.require_admin()?;
        let outcome = op(self.store.as_ref())
            .inspect_err(|e| warn!(action = action, error = %e, "Store mutation failed"))?;
        self.refresh()?;
        Ok(outcome)
    }

    /// Cached employees.
    pub fn employees(&self) -> AppResult<&[Employee]> {
        self.require_admin()?;
        Ok(&self.employees)
    }

    /// Cached positions.
    pub fn positions(&self) -> AppResult<&[Position]> {
        self.require_admin()?;
        Ok(&self.positions)
    }

    fn cached_employee(&self, id: i64) -> AppResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(AppError::EmployeeNotFound { id })
    }

    /// Validates and inserts an employee.
    pub fn add_employee(&mut self, form: EmployeeForm) -> AppResult<Employee> {
        self.require_admin()?;
        let new_employee = form.validate()?;
        self.mutate("add_employee", |store| store.add_employee(new_employee))
    }

    /// Validates and replaces employee `id`, keeping its active flag.
    pub fn update_employee(&mut self, id: i64, form: EmployeeForm) -> AppResult<Employee> {
        self.require_admin()?;
        let fields = form.validate()?;
        let is_active = self.cached_employee(id).map(|e| e.is_active).unwrap_or(true);

        let employee = Employee {
            is_active,
            ..Employee::from_new(id, fields)
        };
        let stored = employee.clone();
        self.mutate("update_employee", |store| store.update_employee(stored))?;
        Ok(employee)
    }

    /// Deletes employee `id`.
    pub fn delete_employee(&mut self, id: i64) -> AppResult<()> {
        self.mutate("delete_employee", |store| store.delete_employee(id))
    }

    /// Validates and inserts a position.
    pub fn add_position(&mut self, form: PositionForm) -> AppResult<Position> {
        self.require_admin()?;
        let position = form.validate()?;
        let stored = position.clone();
        self.mutate("add_position", |store| store.add_position(stored))?;
        Ok(position)
    }

    /// Validates and replaces the position named `name`.
    pub fn update_position(&mut self, name: &str, form: PositionForm) -> AppResult<Position> {
        self.require_admin()?;
        let position = form.validate()?;
        let stored = position.clone();
        self.mutate("update_position", |store| store.update_position(name, stored))?;
        Ok(position)
    }

    /// Deletes the position named `name`.
    pub fn delete_position(&mut self, name: &str) -> AppResult<()> {
        self.mutate("delete_position", |store| store.delete_position(name))
    }

    /// Records a status for an existing employee and day, replacing any
    /// previous one.
    pub fn record_attendance(&mut self, entry: AttendanceEntry) -> AppResult<AttendanceRecord> {
        self.require_admin()?;
        let record = record_status(entry.employee_id, entry.date, entry.status)?;
        self.cached_employee(record.employee_id)?;
        let stored = record.clone();
        self.mutate("record_attendance", |store| store.upsert_attendance(stored))?;
        Ok(record)
    }

    /// The selected period.
    pub fn period(&self) -> AppResult<PeriodView> {
        self.require_admin()?;
        Ok(PeriodView {
            year: self.navigator.year(),
            month: self.navigator.month(),
            label: self.navigator.label()?,
        })
    }

    /// Moves the selected period one month, clamped at the bounds.
    pub fn advance(&mut self, direction: Direction) -> AppResult<PeriodView> {
        self.require_admin()?;
        self.navigator.advance(direction);
        self.period()
    }

    /// Jumps to `year`, rejecting years outside the bounds.
    pub fn set_year(&mut self, year: i32) -> AppResult<PeriodView> {
        self.require_admin()?;
        if !self.navigator.set_year(year) {
            let bounds = self.navigator.bounds();
            return Err(AppError::validation(
                "year",
                format!("must be between {} and {}", bounds.min_year, bounds.max_year),
            ));
        }
        self.period()
    }

    /// Month grid of the selected period.
    pub fn calendar(&self) -> AppResult<CalendarView> {
        let period = self.period()?;
        let cells = month_grid(period.year, period.month)?;
        Ok(CalendarView { period, cells })
    }

    fn attendance_records(&self, employee_id: i64) -> AppResult<Vec<AttendanceRecord>> {
        self.cached_employee(employee_id)?;
        self.store
            .list_attendance(employee_id, self.navigator.year(), self.navigator.month())
    }

    /// Attendance of one employee in the selected period.
    pub fn attendance(&self, employee_id: i64) -> AppResult<AttendanceView> {
        let period = self.period()?;
        let records = self.attendance_records(employee_id)?;
        let calendar = attendance_calendar(period.year, period.month, &records)?;
        Ok(AttendanceView {
            period,
            employee_id,
            records,
            calendar,
        })
    }

    /// Status of one employee on `date`, in any period.
    ///
    /// A day with nothing recorded reads as present.
    pub fn attendance_on(&self, employee_id: i64, date: NaiveDate) -> AppResult<AttendanceRecord> {
        self.require_admin()?;
        self.cached_employee(employee_id)?;
        let records = self
            .store
            .list_attendance(employee_id, date.year(), date.month0())?;
        Ok(AttendanceRecord {
            employee_id,
            date,
            status: status_on(&records, date),
        })
    }

    /// Per-status counts for one employee in the selected period.
    pub fn attendance_summary(&self, employee_id: i64) -> AppResult<AttendanceSummary> {
        self.require_admin()?;
        Ok(summarize(&self.attendance_records(employee_id)?))
    }

    /// Payslip of one employee for the selected period, computed fresh from
    /// the cached lists.
    pub fn payslip(&self, employee_id: i64) -> AppResult<Payslip> {
        let period = self.period()?;
        let employee = self.cached_employee(employee_id)?;
        compute_payslip(employee, &self.positions, &period.label)
    }
}
