use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::init_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its default employee and admin password
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing gastracker…");

    if !cli.test {
        let path = cfg.save()?;
        success(format!("Config file: {}", path.display()));
    }

    let db_path = cfg.database_path();
    if init_db(&db_path)? {
        success(format!("Database initialized at {}", db_path.display()));
        info("Default admin password: admin123");
        info("Default employee: John Doe (ID: EMP001)");
    } else {
        info(format!(
            "Database already exists at {}, left untouched",
            db_path.display()
        ));
    }

    Ok(())
}
