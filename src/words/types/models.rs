//! Core data structures shared by the parser, the backends and the decorators.
//!
//! This module defines:
//! - The delimiter configuration (separator and comment characters)
//! - The parsed record borrowed from a source line
//! - The category suffix used by suffixed lookups

use std::fmt;

use super::error::Result;
use crate::words::format::validate;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '=';

/// Comment character used when none is configured.
pub const DEFAULT_COMMENT: char = '#';

/// The separator and comment characters of a words source.
///
/// Both characters are validated once, on construction, and never change
/// afterwards:
/// - separator must be one of `= | : ; , . ? @`
/// - comment must be one of `# | : ; , . ? @`
/// - separator and comment must differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    separator: char,
    comment: char,
}

impl Delimiters {
    /// Validates and builds a delimiter pair.
    ///
    /// # Errors
    /// - [`SameDelimiter`](super::error::WordsError::SameDelimiter) if both characters are equal
    /// - [`SeparatorInvalid`](super::error::WordsError::SeparatorInvalid) if the separator is outside its allow-set
    /// - [`CommentInvalid`](super::error::WordsError::CommentInvalid) if the comment is outside its allow-set
    pub fn new(separator: char, comment: char) -> Result<Self> {
        validate::validate_delimiters(separator, comment)?;
        Ok(Self { separator, comment })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn comment(&self) -> char {
        self.comment
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            comment: DEFAULT_COMMENT,
        }
    }
}

/// A single `key`/`value` pair parsed out of one source line.
///
/// Both halves are trimmed slices of the original line. The key is never
/// empty; the value may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Record<'a> {
    /// Reassembles the record as a normalized `key<separator>value` line.
    pub fn join(&self, separator: char) -> String {
        let mut line = String::with_capacity(self.key.len() + separator.len_utf8() + self.value.len());
        line.push_str(self.key);
        line.push(separator);
        line.push_str(self.value);
        line
    }
}

/// A category suffix appended to names, e.g. `_EN` or `_FA` for localized words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suffix(String);

impl Suffix {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Suffix {
    fn from(suffix: &str) -> Self {
        Self(suffix.to_owned())
    }
}

impl From<String> for Suffix {
    fn from(suffix: String) -> Self {
        Self(suffix)
    }
}

impl AsRef<str> for Suffix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
