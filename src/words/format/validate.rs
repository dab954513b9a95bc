//! Validation of sources, delimiters, names, suffixes and file handles.

use std::fs::File;
use std::sync::OnceLock;

use log::trace;
use regex::Regex;

use crate::words::types::error::{Result, WordsError};

static SEPARATOR_PATTERN: OnceLock<Regex> = OnceLock::new();
static COMMENT_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached separator allow-set pattern.
fn separator_regex() -> &'static Regex {
    SEPARATOR_PATTERN
        .get_or_init(|| Regex::new(r"^[=|:;,.?@]$").expect("Invalid separator regex pattern"))
}

/// Returns the cached comment allow-set pattern.
fn comment_regex() -> &'static Regex {
    COMMENT_PATTERN
        .get_or_init(|| Regex::new(r"^[#|:;,.?@]$").expect("Invalid comment regex pattern"))
}

/// Fails with [`WordsError::SourceEmpty`] when the source is empty or whitespace only.
pub fn validate_source(source: &str) -> Result<()> {
    if source.trim().is_empty() {
        return Err(WordsError::SourceEmpty);
    }
    Ok(())
}

/// Checks a separator/comment pair.
///
/// The same-character check runs first, then the separator allow-set, then
/// the comment allow-set.
pub fn validate_delimiters(separator: char, comment: char) -> Result<()> {
    if separator == comment {
        return Err(WordsError::SameDelimiter);
    }
    let mut buf = [0u8; 4];
    if !separator_regex().is_match(separator.encode_utf8(&mut buf)) {
        return Err(WordsError::SeparatorInvalid(separator));
    }
    if !comment_regex().is_match(comment.encode_utf8(&mut buf)) {
        return Err(WordsError::CommentInvalid(comment));
    }
    Ok(())
}

/// Trims a lookup name, returning `None` if the result is empty or contains a newline.
pub fn validate_name(name: &str) -> Option<&str> {
    single_line(name)
}

/// Trims a suffix with the same rules as [`validate_name`].
pub fn validate_suffix(suffix: &str) -> Option<&str> {
    single_line(suffix)
}

fn single_line(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('\n') {
        return None;
    }
    Some(trimmed)
}

/// Checks that a file handle is present and refers to a non-empty file,
/// handing the handle back.
///
/// # Errors
/// - [`WordsError::FileNil`] when no handle is given
/// - [`WordsError::Io`] when the file metadata cannot be read
/// - [`WordsError::FileEmpty`] when the file has zero length
pub fn validate_file(file: Option<&File>) -> Result<&File> {
    let file = file.ok_or(WordsError::FileNil)?;
    let size = file.metadata()?.len();
    trace!("Validating file handle: {} bytes", size);
    if size == 0 {
        return Err(WordsError::FileEmpty);
    }
    Ok(file)
}
