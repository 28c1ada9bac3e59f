//! Error types for inject-fs

use std::fmt;
use std::path::PathBuf;

/// Result type for inject-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which input of an injection a path plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Target,
    Source,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target => f.write_str("target"),
            Self::Source => f.write_str("source"),
        }
    }
}

/// Errors that can occur in inject-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The {role} file '{path}' does not exist.")]
    NotAFile { role: FileRole, path: PathBuf },

    #[error("Path has no file name: {path}")]
    NoFileName { path: PathBuf },

    #[error("Backup {backup} does not match {original}")]
    BackupMismatch { original: PathBuf, backup: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
