//! Error types for inject-blocks

use crate::delimiter::DelimiterKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] inject_fs::Error),

    #[error("Too short {which} delimiter: {length} characters, need more than {min}")]
    DelimiterTooShort {
        which: DelimiterKind,
        length: usize,
        min: usize,
    },
}
