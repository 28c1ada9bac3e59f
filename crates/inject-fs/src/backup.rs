//! Timestamped backup copies
//!
//! A backup sits next to the file it protects and is named
//! `<file name>-<YYYY-MM-DD-HH-MM-SS>`. Backups are written for the
//! operator's benefit; nothing reads them back after verification.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::checksum::compute_file_checksum;
use crate::{Error, Result};

/// chrono format string for the backup suffix
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Compute the backup path for `path` taken at `when`.
pub fn backup_path(path: &Path, when: &NaiveDateTime) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| Error::NoFileName {
        path: path.to_path_buf(),
    })?;
    let backup_name = format!(
        "{}-{}",
        file_name.to_string_lossy(),
        when.format(BACKUP_TIMESTAMP_FORMAT)
    );
    Ok(path.with_file_name(backup_name))
}

/// Back up `path` using the current local time.
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    create_backup_at(path, &Local::now().naive_local())
}

/// Back up `path` as if taken at `when`, returning the backup's path.
///
/// An existing backup with the same name is overwritten. The copy is
/// verified by checksum before returning.
///
/// # Errors
///
/// Returns `Error::BackupMismatch` if the copy differs from the original.
pub fn create_backup_at(path: &Path, when: &NaiveDateTime) -> Result<PathBuf> {
    let backup = backup_path(path, when)?;

    let original_checksum = compute_file_checksum(path)?;
    fs::copy(path, &backup).map_err(|e| Error::io(&backup, e))?;
    let backup_checksum = compute_file_checksum(&backup)?;

    if original_checksum != backup_checksum {
        return Err(Error::BackupMismatch {
            original: path.to_path_buf(),
            backup,
        });
    }

    tracing::info!(
        original = %path.display(),
        backup = %backup.display(),
        "Created backup"
    );
    Ok(backup)
}
