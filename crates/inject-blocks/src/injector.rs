//! End-to-end injection of a source file into a target file.

use std::path::{Path, PathBuf};

use inject_fs::{
    FileRole, compute_content_checksum, compute_file_checksum, create_backup, ensure_file,
    read_lines, render_lines, write_atomic,
};

use crate::delimiter::Delimiters;
use crate::error::Result;
use crate::scanner::ScanReport;
use crate::writer::inject_lines;

/// Everything one injection needs, passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectRequest {
    pub target: PathBuf,
    pub source: PathBuf,
    pub delimiters: Delimiters,
}

impl InjectRequest {
    /// Build a request, validating the delimiters.
    pub fn new(
        target: impl Into<PathBuf>,
        source: impl Into<PathBuf>,
        begin: &str,
        end: &str,
    ) -> Result<Self> {
        Ok(Self {
            target: target.into(),
            source: source.into(),
            delimiters: Delimiters::new(begin, end)?,
        })
    }

    /// Check that both files exist. Nothing is read or written.
    pub fn check_files(&self) -> Result<()> {
        ensure_file(&self.target, FileRole::Target)?;
        ensure_file(&self.source, FileRole::Source)?;
        Ok(())
    }
}

/// Outcome of a successful injection.
#[derive(Debug, Clone)]
pub struct InjectReport {
    /// Lines now in the target, in order.
    pub lines: Vec<String>,
    /// Copy of the target as it was before this run.
    pub backup: PathBuf,
    pub scan: ScanReport,
    /// Whether the target's bytes differ from before.
    pub changed: bool,
}

/// Replace the managed block in `request.target` with the contents of
/// `request.source`.
///
/// Both files are checked and read before anything is written. The target is
/// then backed up next to itself and overwritten. A backup is made on every
/// successful run, even when the content comes out unchanged.
///
/// Concurrent runs against the same target are not coordinated; the last
/// writer wins.
///
/// # Errors
/// Fails without touching the target if either file is missing or
/// unreadable, or if the backup cannot be created and verified.
pub fn inject(request: &InjectRequest) -> Result<InjectReport> {
    request.check_files()?;

    let source_lines = read_lines(&request.source)?;
    let target_lines = read_lines(&request.target)?;

    let (lines, scan) = inject_lines(&target_lines, &source_lines, &request.delimiters);
    tracing::debug!(
        path = %request.target.display(),
        output_lines = lines.len(),
        stale = scan.stale_lines,
        "Stripped previous block"
    );
    if scan.is_unterminated() {
        tracing::warn!(
            "Begin delimiter in {} has no matching end; {} trailing line(s) were dropped",
            request.target.display(),
            scan.stale_lines
        );
    }

    let content = render_lines(&lines);
    let changed = compute_file_checksum(&request.target)?
        != compute_content_checksum(content.as_bytes());

    let backup = create_backup(&request.target)?;
    write_atomic(&request.target, content.as_bytes())?;

    log_written(&request.target, lines.len(), changed);

    Ok(InjectReport {
        lines,
        backup,
        scan,
        changed,
    })
}

fn log_written(target: &Path, count: usize, changed: bool) {
    if changed {
        tracing::info!(path = %target.display(), lines = count, "Injected block");
    } else {
        tracing::info!(path = %target.display(), "Target content unchanged");
    }
}
