use crate::db::initialize::ADMIN_PASSWORD_KEY;
use crate::errors::AppError;
use crate::models::{Delivery, Employee, EventType, Expense, LogEntry, NewLogEntry};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

pub fn map_log_entry(row: &Row) -> Result<LogEntry> {
    let kind_str: String = row.get("eventType")?;
    let event_type = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Internal(format!("Invalid event type: {}", kind_str))),
        )
    })?;

    Ok(LogEntry {
        log_id: row.get("log_id")?,
        employee_name: row.get("employeeName")?,
        employee_id: row.get("employeeId")?,
        event_type,
        timestamp: row.get("timestamp")?,
    })
}

pub fn map_delivery(row: &Row) -> Result<Delivery> {
    Ok(Delivery {
        delivery_id: row.get("delivery_id")?,
        date: row.get("date")?,
        emp_name: row.get("emp_name")?,
        emp_id: row.get("emp_id")?,
        cust_id: row.get("cust_id")?,
        gas_price: row.get("gas_price")?,
    })
}

pub fn map_expense(row: &Row) -> Result<Expense> {
    Ok(Expense {
        expense_id: row.get("expense_id")?,
        date: row.get("date")?,
        emp_name: row.get("emp_name")?,
        emp_id: row.get("emp_id")?,
        expense_category: row.get("expense_category")?,
        expense_price: row.get("expense_price")?,
    })
}

// ---------------------------
// employees
// ---------------------------

/// Name matches case-insensitively (SQLite `LOWER`, ASCII only), id exactly.
pub fn find_employee(conn: &Connection, name: &str, id: &str) -> Result<Option<Employee>> {
    conn.query_row(
        "SELECT id, name FROM employees WHERE LOWER(name) = LOWER(?1) AND id = ?2",
        params![name, id],
        map_employee,
    )
    .optional()
}

pub fn list_employees(conn: &Connection) -> Result<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT id, name FROM employees")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Fails with a constraint violation when the id already exists.
pub fn insert_employee(conn: &Connection, employee: &Employee) -> Result<()> {
    conn.execute(
        "INSERT INTO employees (id, name) VALUES (?1, ?2)",
        params![employee.id, employee.name],
    )?;
    Ok(())
}

pub fn delete_all_employees(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM employees", [])
}

// ---------------------------
// logs
// ---------------------------

pub fn insert_log(conn: &Connection, entry: &NewLogEntry) -> Result<()> {
    conn.execute(
        "INSERT INTO logs (employeeName, employeeId, eventType, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.employee_name,
            entry.employee_id,
            entry.event_type.to_db_str(),
            entry.timestamp,
        ],
    )?;
    Ok(())
}

pub fn list_logs(conn: &Connection) -> Result<Vec<LogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT log_id, employeeName, employeeId, eventType, timestamp
         FROM logs
         ORDER BY timestamp DESC",
    )?;
    let rows = stmt.query_map([], map_log_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// admin settings
// ---------------------------

pub fn admin_password(conn: &Connection) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM admin_settings WHERE key = ?1",
        [ADMIN_PASSWORD_KEY],
        |row| row.get(0),
    )
    .optional()
}

/// Overwrites the stored password. A missing row is not recreated.
pub fn set_admin_password(conn: &Connection, password: &str) -> Result<usize> {
    conn.execute(
        "UPDATE admin_settings SET value = ?1 WHERE key = ?2",
        params![password, ADMIN_PASSWORD_KEY],
    )
}

// ---------------------------
// deliveries / expenses
// ---------------------------

pub fn insert_delivery(conn: &Connection, d: &Delivery) -> Result<()> {
    conn.execute(
        "INSERT INTO deliveries (date, emp_name, emp_id, cust_id, gas_price)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![d.date, d.emp_name, d.emp_id, d.cust_id, d.gas_price],
    )?;
    Ok(())
}

/// Ordered by the DD-MM-YYYY string, descending.
pub fn list_deliveries(conn: &Connection) -> Result<Vec<Delivery>> {
    let mut stmt = conn.prepare(
        "SELECT delivery_id, date, emp_name, emp_id, cust_id, gas_price
         FROM deliveries
         ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([], map_delivery)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_expense(conn: &Connection, e: &Expense) -> Result<()> {
    conn.execute(
        "INSERT INTO expenses (date, emp_name, emp_id, expense_category, expense_price)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            e.date,
            e.emp_name,
            e.emp_id,
            e.expense_category,
            e.expense_price
        ],
    )?;
    Ok(())
}

/// Ordered by the DD-MM-YYYY string, descending.
pub fn list_expenses(conn: &Connection) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT expense_id, date, emp_name, emp_id, expense_category, expense_price
         FROM expenses
         ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([], map_expense)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
