// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Check that `path` may be created or overwritten.
///
/// A missing file is always writable; an existing one only with `force`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::AlreadyExists(path.display().to_string()))
}
