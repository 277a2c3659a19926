use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::params;
use std::fs;
use std::path::Path;

pub const ADMIN_PASSWORD_KEY: &str = "password";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_EMPLOYEE_ID: &str = "EMP001";
pub const DEFAULT_EMPLOYEE_NAME: &str = "John Doe";

/// Tables of a fresh store. Log/delivery/expense rows keep denormalized
/// employee snapshots; there are no foreign keys.
const SCHEMA: &str = r#"
    CREATE TABLE employees (
        id   TEXT PRIMARY KEY,
        name TEXT NOT NULL
    );

    CREATE TABLE admin_settings (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE logs (
        log_id       INTEGER PRIMARY KEY AUTOINCREMENT,
        employeeName TEXT,
        employeeId   TEXT,
        eventType    TEXT,
        timestamp    TEXT NOT NULL
    );

    CREATE TABLE deliveries (
        delivery_id INTEGER PRIMARY KEY AUTOINCREMENT,
        date        TEXT,
        emp_name    TEXT,
        emp_id      TEXT,
        cust_id     TEXT,
        gas_price   REAL
    );

    CREATE TABLE expenses (
        expense_id       INTEGER PRIMARY KEY AUTOINCREMENT,
        date             TEXT,
        emp_name         TEXT,
        emp_id           TEXT,
        expense_category TEXT,
        expense_price    REAL
    );
"#;

/// Create and seed the store if its file does not exist yet.
///
/// An existing file is left untouched: no schema check, no migration.
/// Returns `true` when the store was created by this call.
pub fn init_db(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut pool = DbPool::new(path)?;
    pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        tx.execute(
            "INSERT INTO employees (id, name) VALUES (?1, ?2)",
            params![DEFAULT_EMPLOYEE_ID, DEFAULT_EMPLOYEE_NAME],
        )?;
        tx.execute(
            "INSERT INTO admin_settings (key, value) VALUES (?1, ?2)",
            params![ADMIN_PASSWORD_KEY, DEFAULT_ADMIN_PASSWORD],
        )?;
        tx.commit()
    })?;

    Ok(true)
}
