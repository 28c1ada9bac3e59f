//! Line-oriented reads and atomic writes with file locking

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, FileRole, Result};

/// Fail unless `path` names an existing regular file.
pub fn ensure_file(path: &Path, role: FileRole) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::NotAFile {
            role,
            path: path.to_path_buf(),
        })
    }
}

/// Read a text file into lines, each right-trimmed of trailing whitespace.
///
/// CRLF endings lose their `\r` along with any other trailing whitespace.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines: Vec<String> = content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();
    tracing::debug!(path = %path.display(), count = lines.len(), "Read lines");
    Ok(lines)
}

/// Join `lines` into file content, each terminated by a newline.
pub fn render_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}

/// Write content atomically to a file with locking.
///
/// Symlinks are resolved first so the linked file is replaced and the link
/// survives. The content goes to a temp file next to the real file, which
/// is then persisted over it, so a reader never sees a partial write.
/// Permissions of an existing target are carried over, while a new file
/// keeps the temp file's owner-only mode. On any failure the temp file is
/// removed.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let real_path = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(Error::io(path, e)),
    };

    let dir = match real_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent.to_path_buf()
        }
        None => PathBuf::from("."),
    };

    let file_name = real_path.file_name().ok_or_else(|| Error::NoFileName {
        path: path.to_path_buf(),
    })?;
    let prefix = format!(".{}.", file_name.to_string_lossy());
    let mut temp_file = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(|e| Error::io(&dir, e))?;
    let temp_path = temp_file.path().to_path_buf();

    temp_file
        .as_file()
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: real_path.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    FileExt::unlock(temp_file.as_file()).map_err(|_| Error::LockFailed {
        path: real_path.clone(),
    })?;

    if let Ok(metadata) = fs::metadata(&real_path) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io(&temp_path, e))?;
    }

    temp_file
        .persist(&real_path)
        .map_err(|e| Error::io(&real_path, e.error))?;

    tracing::debug!(path = %real_path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_lines_trims_trailing_whitespace_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("f.txt");
        fs::write(&path, "  indented  \ntabbed\t\r\n\nlast").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["  indented", "tabbed", "", "last"]);
    }

    #[test]
    fn render_lines_terminates_every_line() {
        assert_eq!(render_lines(&["a", "", "b"]), "a\n\nb\n");
    }

    #[test]
    fn render_lines_empty_is_empty() {
        assert_eq!(render_lines::<&str>(&[]), "");
    }

    #[test]
    fn ensure_file_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let err = ensure_file(temp.path(), FileRole::Target).unwrap_err();
        assert!(matches!(err, Error::NotAFile { role: FileRole::Target, .. }));
    }
}
