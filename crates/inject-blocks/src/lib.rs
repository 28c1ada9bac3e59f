//! Managed block injection for dotfiles.
//!
//! A managed block is a run of lines framed by two sentinel lines:
//!
//! ```text
//! # >>> my-dotfiles begin >>>
//! export EDITOR=vim
//! # <<< my-dotfiles end <<<
//! ```
//!
//! Each injection strips the old block from the target file and appends a
//! fresh one holding the full contents of a source file. A target that has
//! never been injected simply gains the block at its end.
//!
//! The pure line transformation lives in [`scanner`] and [`writer`]; the
//! [`injector`] module wires it to the filesystem through `inject-fs`.

pub mod delimiter;
pub mod error;
pub mod injector;
pub mod scanner;
pub mod writer;

pub use delimiter::{DelimiterKind, Delimiters, MIN_DELIMITER_LEN};
pub use error::{Error, Result};
pub use injector::{InjectReport, InjectRequest, inject};
pub use scanner::{BlockState, ScanReport, strip_managed_block};
pub use writer::{append_block, inject_lines};
