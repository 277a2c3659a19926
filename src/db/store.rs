//! Storage handle injected into the HTTP layer and the CLI commands.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Delivery, Employee, Expense, LogEntry, NewLogEntry};
use std::path::PathBuf;

/// Every operation the tracker performs against persistent storage.
///
/// Calls are independent: no transaction spans two of them, and
/// concurrent writers race with last-write-wins semantics.
pub trait TrackerStore: Send + Sync {
    fn find_employee(&self, name: &str, id: &str) -> AppResult<Option<Employee>>;
    fn list_employees(&self) -> AppResult<Vec<Employee>>;
    fn add_employee(&self, employee: &Employee) -> AppResult<()>;
    fn delete_all_employees(&self) -> AppResult<usize>;

    fn append_log(&self, entry: &NewLogEntry) -> AppResult<()>;
    /// Newest first.
    fn list_logs(&self) -> AppResult<Vec<LogEntry>>;

    /// Plaintext admin credential, if the row exists.
    fn admin_password(&self) -> AppResult<Option<String>>;
    fn set_admin_password(&self, password: &str) -> AppResult<()>;

    fn add_delivery(&self, delivery: &Delivery) -> AppResult<()>;
    fn list_deliveries(&self) -> AppResult<Vec<Delivery>>;
    fn add_expense(&self, expense: &Expense) -> AppResult<()>;
    fn list_expenses(&self) -> AppResult<Vec<Expense>>;
}

/// SQLite-backed store. Opens a fresh connection for every call.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> AppResult<DbPool> {
        Ok(DbPool::new(&self.path)?)
    }
}

impl TrackerStore for SqliteStore {
    fn find_employee(&self, name: &str, id: &str) -> AppResult<Option<Employee>> {
        let pool = self.open()?;
        Ok(queries::find_employee(&pool.conn, name, id)?)
    }

    fn list_employees(&self) -> AppResult<Vec<Employee>> {
        let pool = self.open()?;
        Ok(queries::list_employees(&pool.conn)?)
    }

    fn add_employee(&self, employee: &Employee) -> AppResult<()> {
        let pool = self.open()?;
        Ok(queries::insert_employee(&pool.conn, employee)?)
    }

    fn delete_all_employees(&self) -> AppResult<usize> {
        let pool = self.open()?;
        Ok(queries::delete_all_employees(&pool.conn)?)
    }

    fn append_log(&self, entry: &NewLogEntry) -> AppResult<()> {
        let pool = self.open()?;
        Ok(queries::insert_log(&pool.conn, entry)?)
    }

    fn list_logs(&self) -> AppResult<Vec<LogEntry>> {
        let pool = self.open()?;
        Ok(queries::list_logs(&pool.conn)?)
    }

    fn admin_password(&self) -> AppResult<Option<String>> {
        let pool = self.open()?;
        Ok(queries::admin_password(&pool.conn)?)
    }

    fn set_admin_password(&self, password: &str) -> AppResult<()> {
        let pool = self.open()?;
        let updated = queries::set_admin_password(&pool.conn, password)?;
        if updated == 0 {
            tracing::warn!("admin password row missing, nothing updated");
        }
        Ok(())
    }

    fn add_delivery(&self, delivery: &Delivery) -> AppResult<()> {
        let pool = self.open()?;
        Ok(queries::insert_delivery(&pool.conn, delivery)?)
    }

    fn list_deliveries(&self) -> AppResult<Vec<Delivery>> {
        let pool = self.open()?;
        Ok(queries::list_deliveries(&pool.conn)?)
    }

    fn add_expense(&self, expense: &Expense) -> AppResult<()> {
        let pool = self.open()?;
        Ok(queries::insert_expense(&pool.conn, expense)?)
    }

    fn list_expenses(&self) -> AppResult<Vec<Expense>> {
        let pool = self.open()?;
        Ok(queries::list_expenses(&pool.conn)?)
    }
}
