//! Custom error types for the wordbook crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum WordsError {
    /// The words source is empty or contains only whitespace.
    #[error("words source is empty")]
    SourceEmpty,

    /// Separator and comment were given the same character.
    #[error("separator and comment are same character")]
    SameDelimiter,

    /// The separator is not one character of `=|:;,.?@`.
    #[error("separator character '{0}' is invalid, the separator must be one character delimiter of (=|:;,.?@)")]
    SeparatorInvalid(char),

    /// The comment is not one character of `#|:;,.?@`.
    #[error("comment character '{0}' is invalid, the comment must be one character delimiter of (#|:;,.?@)")]
    CommentInvalid(char),

    /// The line is blank. Skipped during normalization.
    #[error("line is empty")]
    LineEmpty,

    /// The line starts with the comment character. Skipped during normalization.
    #[error("line is comment")]
    LineComment,

    /// A non-blank, non-comment line has no separator.
    #[error("separator not present in record, at line '{line}'")]
    SeparatorNotPresent { line: String },

    /// The part before the separator is empty after trimming.
    #[error("name not present in record, at line '{line}'")]
    NameNotPresent { line: String },

    /// The same name appears on more than one line.
    #[error("duplicated name found, name '{name}'")]
    NameDuplicated { name: String },

    /// The suffix is empty after trimming or spans more than one line.
    #[error("suffix is invalid")]
    SuffixInvalid,

    /// A decorator was constructed without a words lookup to wrap.
    #[error("words is nil")]
    WordsNil,

    /// No file handle was supplied.
    #[error("file is nil")]
    FileNil,

    /// The file handle points at a zero-length file.
    #[error("file is empty")]
    FileEmpty,

    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WordsError {
    /// Returns `true` for the line signals that normalization skips over
    /// instead of failing: blank lines and comment lines.
    pub fn is_skip(&self) -> bool {
        matches!(self, WordsError::LineEmpty | WordsError::LineComment)
    }
}

/// A convenience `Result` type alias using the crate's `WordsError` type.
pub type Result<T> = std::result::Result<T, WordsError>;
