use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the SQLite file to `dest_file`, or stream it into a zip archive
    /// next to it when `compress` is set.
    ///
    /// Only the returned path is ever written. The live database is never a
    /// valid destination, even with `force`.
    pub fn backup(db_path: &Path, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // 1️⃣ Check DB exists
        if !db_path.exists() {
            return Err(AppError::StoreMissing(db_path.display().to_string()));
        }

        // 2️⃣ Never write over the store itself
        if is_same_file(db_path, &final_target)? {
            return Err(AppError::Validation(format!(
                "Backup destination is the database itself: {}",
                final_target.display()
            )));
        }

        // 3️⃣ Refuse to clobber an existing backup
        if final_target.exists() && !force {
            return Err(AppError::AlreadyExists(final_target.display().to_string()));
        }

        // 4️⃣ Ensure destination folder exists
        if let Some(parent) = final_target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 5️⃣ Plain copy or archive
        if compress {
            let entry_name = dest
                .with_extension("db")
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "tracker.db".to_string());
            compress_backup(db_path, &final_target, &entry_name)?;
        } else {
            fs::copy(db_path, &final_target)?;
            success(format!("Backup created: {}", final_target.display()));
        }

        Ok(final_target)
    }
}

/// True when `target` exists and resolves to the same file as `db_path`.
fn is_same_file(db_path: &Path, target: &Path) -> AppResult<bool> {
    if !target.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(db_path)? == fs::canonicalize(target)?)
}

/// Write the database as a single deflated entry of a new .zip archive.
fn compress_backup(db_path: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let mut source = fs::File::open(db_path)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)?;
    std::io::copy(&mut source, &mut zip)?;
    zip.finish()?;

    success(format!("Compressed backup created: {}", zip_path.display()));
    Ok(())
}
