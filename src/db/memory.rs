//! In-memory `TrackerStore` double for unit tests of the business logic.

use crate::db::initialize::{DEFAULT_ADMIN_PASSWORD, DEFAULT_EMPLOYEE_ID, DEFAULT_EMPLOYEE_NAME};
use crate::db::store::TrackerStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Delivery, Employee, Expense, LogEntry, NewLogEntry};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    admin_password: Option<String>,
    logs: Vec<LogEntry>,
    deliveries: Vec<Delivery>,
    expenses: Vec<Expense>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Same seed as a freshly initialized SQLite store.
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut t = store.tables.lock().unwrap();
            t.employees
                .push(Employee::new(DEFAULT_EMPLOYEE_ID, DEFAULT_EMPLOYEE_NAME));
            t.admin_password = Some(DEFAULT_ADMIN_PASSWORD.to_string());
        }
        store
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::Internal("memory store poisoned".into()))
    }
}

impl TrackerStore for MemoryStore {
    fn find_employee(&self, name: &str, id: &str) -> AppResult<Option<Employee>> {
        let t = self.lock()?;
        Ok(t.employees
            .iter()
            .find(|e| e.id == id && e.name.to_ascii_lowercase() == name.to_ascii_lowercase())
            .cloned())
    }

    fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.lock()?.employees.clone())
    }

    fn add_employee(&self, employee: &Employee) -> AppResult<()> {
        let mut t = self.lock()?;
        if t.employees.iter().any(|e| e.id == employee.id) {
            return Err(AppError::Internal(
                "UNIQUE constraint failed: employees.id".into(),
            ));
        }
        t.employees.push(employee.clone());
        Ok(())
    }

    fn delete_all_employees(&self) -> AppResult<usize> {
        let mut t = self.lock()?;
        let n = t.employees.len();
        t.employees.clear();
        Ok(n)
    }

    fn append_log(&self, entry: &NewLogEntry) -> AppResult<()> {
        let mut t = self.lock()?;
        let log_id = t.logs.len() as i64 + 1;
        t.logs.push(LogEntry {
            log_id,
            employee_name: entry.employee_name.clone(),
            employee_id: entry.employee_id.clone(),
            event_type: entry.event_type,
            timestamp: entry.timestamp.clone(),
        });
        Ok(())
    }

    fn list_logs(&self) -> AppResult<Vec<LogEntry>> {
        let mut logs = self.lock()?.logs.clone();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(logs)
    }

    fn admin_password(&self) -> AppResult<Option<String>> {
        Ok(self.lock()?.admin_password.clone())
    }

    fn set_admin_password(&self, password: &str) -> AppResult<()> {
        let mut t = self.lock()?;
        if t.admin_password.is_some() {
            t.admin_password = Some(password.to_string());
        }
        Ok(())
    }

    fn add_delivery(&self, delivery: &Delivery) -> AppResult<()> {
        let mut t = self.lock()?;
        let mut row = delivery.clone();
        row.delivery_id = t.deliveries.len() as i64 + 1;
        t.deliveries.push(row);
        Ok(())
    }

    fn list_deliveries(&self) -> AppResult<Vec<Delivery>> {
        let mut rows = self.lock()?.deliveries.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    fn add_expense(&self, expense: &Expense) -> AppResult<()> {
        let mut t = self.lock()?;
        let mut row = expense.clone();
        row.expense_id = t.expenses.len() as i64 + 1;
        t.expenses.push(row);
        Ok(())
    }

    fn list_expenses(&self) -> AppResult<Vec<Expense>> {
        let mut rows = self.lock()?.expenses.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }
}
