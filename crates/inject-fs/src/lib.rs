//! Filesystem layer for the block injector
//!
//! Line-oriented reads, atomic overwrites, timestamped backups and the
//! checksums used to verify them.

pub mod backup;
pub mod checksum;
pub mod error;
pub mod io;

pub use backup::{BACKUP_TIMESTAMP_FORMAT, backup_path, create_backup, create_backup_at};
pub use checksum::{compute_content_checksum, compute_file_checksum};
pub use error::{Error, FileRole, Result};
pub use io::{ensure_file, read_lines, render_lines, write_atomic};
