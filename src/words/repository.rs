//! Array backed words table.

use log::{debug, trace};

use super::format::{line, normalize, validate};
use super::types::error::{Result, WordsError};
use super::types::models::Delimiters;
use super::Words;

/// Words table holding the normalized source lines in an array.
///
/// Every lookup scans the lines in order and returns the first match, so
/// lookups are O(n) with no memory beyond the stored lines. The data is
/// immutable after construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct ArrayBackend {
    lines: Vec<String>,
    separator: char,
}

impl ArrayBackend {
    /// Parses `source` with the given separator and comment characters.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source is empty or whitespace only
    /// - The delimiters are invalid or equal
    /// - A line has no separator or no name
    /// - A name appears more than once
    pub fn new(source: &str, separator: char, comment: char) -> Result<Self> {
        validate::validate_source(source)?;
        let delimiters = Delimiters::new(separator, comment)?;
        Self::build(source, delimiters)
    }

    /// Parses `source` with an already validated delimiter pair.
    pub fn with_delimiters(source: &str, delimiters: Delimiters) -> Result<Self> {
        validate::validate_source(source)?;
        Self::build(source, delimiters)
    }

    fn build(source: &str, delimiters: Delimiters) -> Result<Self> {
        let separator = delimiters.separator();
        let lines = normalize::normalize(source, separator, delimiters.comment())?;

        if let Some(name) = normalize::check_duplication(&lines, separator) {
            return Err(WordsError::NameDuplicated { name: name.to_owned() });
        }

        debug!("Array words table built: {} records, separator '{}'", lines.len(), separator);
        Ok(Self { lines, separator })
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the normalized `key<separator>value` lines in source order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Words for ArrayBackend {
    fn find(&self, name: &str) -> Option<String> {
        let name = validate::validate_name(name)?;
        trace!("Scanning {} records for '{}'", self.lines.len(), name);
        self.lines
            .iter()
            .find_map(|l| line::extract(l, name, self.separator))
            .map(str::to_owned)
    }
}
