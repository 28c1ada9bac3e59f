//! Validated begin/end sentinel lines.

use std::fmt;

use crate::error::{Error, Result};

/// A delimiter must be strictly longer than this many characters once
/// trimmed, so ordinary file content cannot match it by accident.
pub const MIN_DELIMITER_LEN: usize = 10;

/// Which side of a block a delimiter marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Begin,
    End,
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin => f.write_str("begin"),
            Self::End => f.write_str("end"),
        }
    }
}

/// The begin/end line pair framing a managed block.
///
/// Both lines are stored trimmed. Matching against file content is exact
/// line equality; there is no pattern syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    begin: String,
    end: String,
}

impl Delimiters {
    /// Trim and validate a delimiter pair.
    ///
    /// # Errors
    /// Returns `Error::DelimiterTooShort` for the first delimiter (begin
    /// before end) whose trimmed length is not above [`MIN_DELIMITER_LEN`].
    ///
    /// # Example
    /// ```
    /// use inject_blocks::Delimiters;
    ///
    /// let delims = Delimiters::new("  # BEGIN DOTFILES  ", "# END DOTFILES").unwrap();
    /// assert_eq!(delims.begin(), "# BEGIN DOTFILES");
    ///
    /// assert!(Delimiters::new("# BEGIN", "# END DOTFILES").is_err());
    /// ```
    pub fn new(begin: &str, end: &str) -> Result<Self> {
        let begin = validate(begin, DelimiterKind::Begin)?;
        let end = validate(end, DelimiterKind::End)?;
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

fn validate(raw: &str, which: DelimiterKind) -> Result<String> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length <= MIN_DELIMITER_LEN {
        return Err(Error::DelimiterTooShort {
            which,
            length,
            min: MIN_DELIMITER_LEN,
        });
    }
    Ok(trimmed.to_string())
}
