//! Removal of a previously injected block.
//!
//! The scan is a two-state machine over the target's lines:
//!
//! ```text
//!            begin                end
//! Outside ──────────▶ Inside ──────────▶ Outside
//! ```
//!
//! Lines seen while `Outside` are kept, lines seen while `Inside` are stale
//! block content and dropped, and both delimiter lines are dropped. Only one
//! block can be open at a time: a second `begin` while `Inside` is dropped
//! like any other stale line, and an `end` while `Outside` is ordinary text.
//!
//! The blank line directly above a `begin` is the separator written by the
//! previous injection, so it is dropped together with the block. Without
//! that, every run would grow the file by one blank line. A blank line the
//! user wrote there goes too: `["A", "", begin, .., end, "B"]` keeps
//! `["A", "B"]`, not `["A", "", "B"]`.

use crate::delimiter::Delimiters;

/// Where the scanner is relative to a managed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Outside,
    Inside,
}

/// What a scan saw while stripping the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanReport {
    /// Number of `begin` lines that opened a block.
    pub blocks_opened: usize,
    /// Number of `end` lines that closed a block.
    pub blocks_closed: usize,
    /// Lines dropped from inside a block, delimiters excluded.
    pub stale_lines: usize,
    /// State when the input ran out.
    pub final_state: BlockState,
}

impl ScanReport {
    /// True when a `begin` was never closed, so everything after it was
    /// dropped.
    pub fn is_unterminated(&self) -> bool {
        self.final_state == BlockState::Inside
    }
}

/// Return `lines` with any managed block (delimiters included) removed.
///
/// A `begin` with no matching `end` drops every remaining line; the
/// returned report flags that case through [`ScanReport::is_unterminated`].
///
/// # Example
/// ```
/// use inject_blocks::{Delimiters, strip_managed_block};
///
/// let delims = Delimiters::new("# BEGIN MANAGED", "# END MANAGED").unwrap();
/// let lines = ["a", "# BEGIN MANAGED", "old", "# END MANAGED", "b"];
///
/// let (kept, report) = strip_managed_block(&lines, &delims);
/// assert_eq!(kept, vec!["a", "b"]);
/// assert_eq!(report.stale_lines, 1);
/// ```
pub fn strip_managed_block<S: AsRef<str>>(
    lines: &[S],
    delimiters: &Delimiters,
) -> (Vec<String>, ScanReport) {
    let mut kept: Vec<String> = Vec::with_capacity(lines.len());
    let mut report = ScanReport::default();
    let mut state = BlockState::Outside;

    for line in lines {
        let line = line.as_ref();
        match state {
            BlockState::Inside if line == delimiters.end() => {
                state = BlockState::Outside;
                report.blocks_closed += 1;
            }
            BlockState::Outside if line == delimiters.begin() => {
                if kept.last().is_some_and(|prev| prev.is_empty()) {
                    kept.pop();
                }
                state = BlockState::Inside;
                report.blocks_opened += 1;
            }
            BlockState::Outside => kept.push(line.to_string()),
            BlockState::Inside => report.stale_lines += 1,
        }
    }

    report.final_state = state;
    (kept, report)
}
