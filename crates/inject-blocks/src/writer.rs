//! Assembly of the injected block.

use crate::delimiter::Delimiters;
use crate::scanner::{ScanReport, strip_managed_block};

/// Append a blank separator line and a fresh block holding `source`.
pub fn append_block<S: AsRef<str>>(lines: &mut Vec<String>, delimiters: &Delimiters, source: &[S]) {
    lines.reserve(source.len() + 3);
    lines.push(String::new());
    lines.push(delimiters.begin().to_string());
    lines.extend(source.iter().map(|line| line.as_ref().to_string()));
    lines.push(delimiters.end().to_string());
}

/// Replace the managed block in `target` with `source`.
///
/// The old block is stripped wherever it was and the new block always lands
/// at the end, after one blank line.
///
/// # Example
/// ```
/// use inject_blocks::{Delimiters, inject_lines};
///
/// let delims = Delimiters::new("START_MARKER_1234567890", "END_MARKER_1234567890").unwrap();
/// let target = ["A", "START_MARKER_1234567890", "OLD", "END_MARKER_1234567890", "B"];
///
/// let (lines, _) = inject_lines(&target, &["NEW1", "NEW2"], &delims);
/// assert_eq!(
///     lines,
///     vec!["A", "B", "", "START_MARKER_1234567890", "NEW1", "NEW2", "END_MARKER_1234567890"]
/// );
/// ```
pub fn inject_lines<T: AsRef<str>, S: AsRef<str>>(
    target: &[T],
    source: &[S],
    delimiters: &Delimiters,
) -> (Vec<String>, ScanReport) {
    let (mut lines, report) = strip_managed_block(target, delimiters);
    append_block(&mut lines, delimiters, source);
    (lines, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delims() -> Delimiters {
        Delimiters::new("# >>> dotfiles >>>", "# <<< dotfiles <<<").unwrap()
    }

    #[test]
    fn test_inject_into_empty_target() {
        let (lines, _) = inject_lines::<&str, &str>(&[], &["x"], &delims());
        assert_eq!(lines, vec!["", "# >>> dotfiles >>>", "x", "# <<< dotfiles <<<"]);
    }

    #[test]
    fn test_inject_empty_source() {
        let (lines, _) = inject_lines::<&str, &str>(&["keep"], &[], &delims());
        assert_eq!(
            lines,
            vec!["keep", "", "# >>> dotfiles >>>", "# <<< dotfiles <<<"]
        );
    }

    #[test]
    fn test_first_injection_appends() {
        let (lines, report) = inject_lines(&["a", "b"], &["new"], &delims());
        assert_eq!(
            lines,
            vec!["a", "b", "", "# >>> dotfiles >>>", "new", "# <<< dotfiles <<<"]
        );
        assert_eq!(report.blocks_opened, 0);
    }
}
