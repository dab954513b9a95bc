//! Source normalization and duplicate name detection.
//!
//! Normalization turns a raw source into an ordered list of `key<sep>value`
//! lines. Duplicate detection comes in two flavours that reject the same
//! sources:
//! - [`check_duplication`] scans the normalized lines pairwise, O(n²)
//! - [`collect_table`] fails while inserting into a map, O(n)

use std::collections::HashMap;

use log::{debug, trace};

use super::line::{key_of, normalize_line};
use crate::words::types::error::{Result, WordsError};

/// Normalizes every line of `source`, skipping blank and comment lines.
///
/// The first hard parse error aborts normalization and is returned as is;
/// no partial result is produced. A source made only of blanks and comments
/// yields an empty list.
pub fn normalize(source: &str, separator: char, comment: char) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(source.matches('\n').count() + 1);
    for line in source.split('\n') {
        match normalize_line(line, separator, comment) {
            Ok(normalized) => lines.push(normalized),
            Err(e) if e.is_skip() => continue,
            Err(e) => return Err(e),
        }
    }
    debug!("Normalized source into {} records", lines.len());
    Ok(lines)
}

/// Looks for a name present on more than one normalized line.
///
/// Compares every line against all later lines, low index first, and
/// returns the first repeated name found.
pub fn check_duplication(lines: &[String], separator: char) -> Option<&str> {
    for (index, line) in lines.iter().enumerate() {
        let key = key_of(line, separator);
        if lines[index + 1..].iter().any(|other| key_of(other, separator) == key) {
            trace!("Duplicated name '{}' at record {}", key, index);
            return Some(key);
        }
    }
    None
}

/// Builds a name to value table from normalized lines.
///
/// # Errors
/// Returns [`WordsError::NameDuplicated`] as soon as a name is inserted twice.
pub fn collect_table(lines: &[String], separator: char) -> Result<HashMap<String, String>> {
    let mut table = HashMap::with_capacity(lines.len() + 1);
    for line in lines {
        let (key, value) = line.split_once(separator).unwrap_or((line.as_str(), ""));
        if table.contains_key(key) {
            return Err(WordsError::NameDuplicated { name: key.to_owned() });
        }
        table.insert(key.to_owned(), value.to_owned());
    }
    Ok(table)
}
