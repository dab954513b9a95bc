//! Single line parsing.
//!
//! # Line Structure
//! ```text
//! [whitespace] <key> [whitespace] <separator> [whitespace] <value> [whitespace]
//! ```
//!
//! The first occurrence of the separator splits the line, so a value may
//! contain the separator character while a key never does. Blank lines and
//! lines starting with the comment character are reported as skip signals
//! ([`WordsError::is_skip`]), every other failure is a hard error.

use crate::words::types::error::{Result, WordsError};
use crate::words::types::models::Record;

/// Parses one raw line into a [`Record`].
///
/// # Errors
/// - [`WordsError::LineEmpty`] for a blank line (skip)
/// - [`WordsError::LineComment`] for a comment line (skip)
/// - [`WordsError::SeparatorNotPresent`] when the separator is missing
/// - [`WordsError::NameNotPresent`] when nothing precedes the separator
pub fn parse_line(line: &str, separator: char, comment: char) -> Result<Record<'_>> {
    let data = line.trim();
    if data.is_empty() {
        return Err(WordsError::LineEmpty);
    }
    if data.starts_with(comment) {
        return Err(WordsError::LineComment);
    }

    let (key, value) = data
        .split_once(separator)
        .ok_or_else(|| WordsError::SeparatorNotPresent { line: line.to_owned() })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(WordsError::NameNotPresent { line: line.to_owned() });
    }

    Ok(Record {
        key,
        value: value.trim(),
    })
}

/// Parses a line and reassembles it as `key<separator>value`.
pub fn normalize_line(line: &str, separator: char, comment: char) -> Result<String> {
    parse_line(line, separator, comment).map(|record| record.join(separator))
}

/// Returns the value of a normalized line if its key equals `name`.
pub fn extract<'a>(line: &'a str, name: &str, separator: char) -> Option<&'a str> {
    let (key, value) = line.split_once(separator)?;
    (key == name).then_some(value)
}

/// Returns the key of a normalized line.
pub(crate) fn key_of(line: &str, separator: char) -> &str {
    line.split_once(separator).map_or(line, |(key, _)| key)
}
