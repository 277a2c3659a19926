use crate::core::dashboard::DashboardLogic;
use crate::db::TrackerStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportTable, ensure_writable, export_csv, export_json};
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write one dashboard section to `file`, in dashboard order.
    /// Returns the number of rows written.
    pub fn export(
        store: &dyn TrackerStore,
        table: ExportTable,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let dashboard = DashboardLogic::load(store)?;

        match table {
            ExportTable::Logs => write_rows(&dashboard.logs, format, path),
            ExportTable::Deliveries => write_rows(&dashboard.deliveries, format, path),
            ExportTable::Expenses => write_rows(&dashboard.expenses, format, path),
            ExportTable::Summary => write_rows(&dashboard.summary.rows(), format, path),
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }
    Ok(rows.len())
}
