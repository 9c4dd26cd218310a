//! File helpers shared by both bootstrap phases.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::lib::errors::FileError;

/// Format applied to timestamped backup suffixes (second resolution).
const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Read a text file that may legitimately be absent.
pub fn read_optional_text(path: &Path) -> Result<Option<String>, FileError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(FileError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write text to `path`, creating the parent directory first.
pub fn write_text(path: &Path, content: &str) -> Result<(), FileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| FileError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Snapshot pre-rewrite content to a `.bak` sibling.
///
/// The sibling is an artifact of the in-place rewrite and is never cleaned up.
pub fn write_bak_sibling(path: &Path, content: &str) -> Result<PathBuf, FileError> {
    let backup = sibling_with_suffix(path, "bak");
    fs::write(&backup, content).map_err(|source| FileError::Write {
        path: backup.clone(),
        source,
    })?;
    Ok(backup)
}

/// Copy an existing file to `<name>.backup.<YYYYMMDD_HHMMSS>` next to it.
pub fn timestamped_backup(path: &Path, now: DateTime<Local>) -> Result<PathBuf, FileError> {
    let stamp = now.format(BACKUP_STAMP_FORMAT);
    let backup = sibling_with_suffix(path, &format!("backup.{stamp}"));
    fs::copy(path, &backup).map_err(|source| FileError::Copy {
        from: path.to_path_buf(),
        to: backup.clone(),
        source,
    })?;
    Ok(backup)
}

/// Append a dotted suffix to the file name, keeping the existing extension.
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{file_name}.{suffix}"))
}
