use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        force,
    } = cmd
    {
        let db_path = cfg.database_path();
        if !db_path.exists() {
            return Err(AppError::StoreMissing(db_path.display().to_string()));
        }

        let store = SqliteStore::new(db_path);
        let rows = ExportLogic::export(&store, *table, *format, file, *force)?;
        info(format!(
            "{} {} row(s) written as {}",
            rows,
            table.as_str(),
            format.as_str()
        ));
    }
    Ok(())
}
