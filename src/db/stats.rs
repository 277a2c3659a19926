use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const TABLES: [&str; 5] = ["employees", "admin_settings", "logs", "deliveries", "expenses"];

/// Row count of one table. Table names come from the fixed list above.
pub fn count_rows(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in TABLES {
        let count = count_rows(pool, table)?;
        println!("    {:<15} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) LAST ACTIVITY
    //
    let last_log: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM logs ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!(
        "{}• Last login/logout:{} {}",
        CYAN,
        RESET,
        last_log.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn counts_seed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.db");
        init_db(&path).unwrap();

        let pool = DbPool::new(&path).unwrap();
        assert_eq!(count_rows(&pool, "employees").unwrap(), 1);
        assert_eq!(count_rows(&pool, "admin_settings").unwrap(), 1);
        assert_eq!(count_rows(&pool, "logs").unwrap(), 0);
    }
}
