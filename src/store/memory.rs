//! In-memory data store.
//!
//! Holds every table behind a single `RwLock`. It is the store the server
//! runs with out of the box, seeded from `seed.yaml`, and the one the tests
//! drive.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::DataStore;
use crate::calculation::month_range;
use crate::config::SeedConfig;
use crate::error::{AppError, AppResult};
use crate::models::{
    AdminAccount, AdminIdentity, AttendanceRecord, AttendanceStatus, Employee, NewEmployee,
    Position,
};

#[derive(Debug, Default)]
struct Tables {
    employees: BTreeMap<i64, Employee>,
    positions: BTreeMap<String, Decimal>,
    attendance: BTreeMap<(i64, NaiveDate), AttendanceStatus>,
    admins: Vec<AdminAccount>,
    last_employee_id: i64,
}

/// A [`DataStore`] kept entirely in process memory.
///
/// # Example
///
/// ```
/// use employee_admin::models::NewEmployee;
/// use employee_admin::store::{DataStore, InMemoryStore};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// let employee = store
///     .add_employee(NewEmployee {
///         nik: "3201".to_string(),
///         name: "Siti".to_string(),
///         department: "Finance".to_string(),
///         position: "Staff".to_string(),
///         base_salary: Decimal::from(3_000_000),
///     })
///     .unwrap();
/// assert_eq!(employee.id, 1);
/// assert_eq!(store.list_employees().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store with no admin accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the seed data.
    ///
    /// Seed rows go through the same checks as live inserts, so a seed with a
    /// duplicate NIK or position name is rejected.
    pub fn seeded(seed: &SeedConfig) -> AppResult<Self> {
        let store = Self::new();
        for position in &seed.positions {
            store.add_position(position.clone())?;
        }
        for employee in &seed.employees {
            store.add_employee(employee.clone())?;
        }
        store.write()?.admins = seed.admins.clone();

        info!(
            admins = seed.admins.len(),
            positions = seed.positions.len(),
            employees = seed.employees.len(),
            "In-memory store seeded"
        );
        Ok(store)
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| AppError::Store {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| AppError::Store {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl Tables {
    fn nik_taken(&self, nik: &str, except_id: Option<i64>) -> bool {
        self.employees
            .values()
            .any(|e| e.nik == nik && Some(e.id) != except_id)
    }
}

impl DataStore for InMemoryStore {
    fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    fn add_employee(&self, employee: NewEmployee) -> AppResult<Employee> {
        let mut tables = self.write()?;
        if tables.nik_taken(&employee.nik, None) {
            return Err(AppError::DuplicateNik { nik: employee.nik });
        }

        tables.last_employee_id += 1;
        let record = Employee::from_new(tables.last_employee_id, employee);
        tables.employees.insert(record.id, record.clone());
        debug!(employee_id = record.id, nik = %record.nik, "Employee inserted");
        Ok(record)
    }

    fn update_employee(&self, employee: Employee) -> AppResult<()> {
        let mut tables = self.write()?;
        if !tables.employees.contains_key(&employee.id) {
            return Err(AppError::EmployeeNotFound { id: employee.id });
        }
        if tables.nik_taken(&employee.nik, Some(employee.id)) {
            return Err(AppError::DuplicateNik { nik: employee.nik });
        }

        debug!(employee_id = employee.id, "Employee updated");
        tables.employees.insert(employee.id, employee);
        Ok(())
    }

    fn delete_employee(&self, id: i64) -> AppResult<()> {
        let mut tables = self.write()?;
        if tables.employees.remove(&id).is_none() {
            return Err(AppError::EmployeeNotFound { id });
        }
        tables.attendance.retain(|(employee_id, _), _| *employee_id != id);
        debug!(employee_id = id, "Employee deleted");
        Ok(())
    }

    fn list_positions(&self) -> AppResult<Vec<Position>> {
        Ok(self
            .read()?
            .positions
            .iter()
            .map(|(name, allowance)| Position {
                name: name.clone(),
                allowance: *allowance,
            })
            .collect())
    }

    fn add_position(&self, position: Position) -> AppResult<()> {
        let mut tables = self.write()?;
        if tables.positions.contains_key(&position.name) {
            return Err(AppError::DuplicatePosition {
                name: position.name,
            });
        }
        tables.positions.insert(position.name, position.allowance);
        Ok(())
    }

    fn update_position(&self, name: &str, position: Position) -> AppResult<()> {
        let mut tables = self.write()?;
        if !tables.positions.contains_key(name) {
            return Err(AppError::PositionNotFound {
                name: name.to_string(),
            });
        }
        if position.name != name && tables.positions.contains_key(&position.name) {
            return Err(AppError::DuplicatePosition {
                name: position.name,
            });
        }

        tables.positions.remove(name);
        tables.positions.insert(position.name, position.allowance);
        Ok(())
    }

    fn delete_position(&self, name: &str) -> AppResult<()> {
        let mut tables = self.write()?;
        if !tables.positions.contains_key(name) {
            return Err(AppError::PositionNotFound {
                name: name.to_string(),
            });
        }

        let holders = tables
            .employees
            .values()
            .filter(|e| e.position == name)
            .count();
        if holders > 0 {
            return Err(AppError::PositionInUse {
                name: name.to_string(),
                employees: holders,
            });
        }

        tables.positions.remove(name);
        Ok(())
    }

    fn list_attendance(
        &self,
        employee_id: i64,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let (first, last) = month_range(year, month)?;
        Ok(self
            .read()?
            .attendance
            .range((employee_id, first)..=(employee_id, last))
            .map(|(&(employee_id, date), &status)| AttendanceRecord {
                employee_id,
                date,
                status,
            })
            .collect())
    }

    fn upsert_attendance(&self, record: AttendanceRecord) -> AppResult<()> {
        let mut tables = self.write()?;
        if !tables.employees.contains_key(&record.employee_id) {
            return Err(AppError::EmployeeNotFound {
                id: record.employee_id,
            });
        }
        let previous = tables
            .attendance
            .insert((record.employee_id, record.date), record.status);
        debug!(
            employee_id = record.employee_id,
            date = %record.date,
            status = %record.status,
            replaced = previous.is_some(),
            "Attendance recorded"
        );
        Ok(())
    }

    fn admin_login(&self, email: &str, password: &str) -> AppResult<AdminIdentity> {
        self.read()?
            .admins
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(|a| AdminIdentity {
                email: a.email.clone(),
            })
            .ok_or(AppError::AuthenticationFailed)
    }
}
