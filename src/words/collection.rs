//! Map backed words table.

use std::collections::HashMap;

use log::debug;

use super::format::{normalize, validate};
use super::types::error::Result;
use super::types::models::Delimiters;
use super::Words;

/// Words table holding the source as a name to value map.
///
/// The map is built once on construction, rejecting duplicated names while
/// inserting. Lookups are O(1).
#[derive(Debug, Clone)]
pub struct MapBackend {
    table: HashMap<String, String>,
}

impl MapBackend {
    /// Parses `source` with the given separator and comment characters.
    ///
    /// # Errors
    /// Fails under the same conditions as [`ArrayBackend::new`](super::repository::ArrayBackend::new).
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
        let table = normalize::collect_table(&lines, separator)?;
        debug!("Map words table built: {} records", table.len());
        Ok(Self { table })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns an iterator over the stored names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl Words for MapBackend {
    fn find(&self, name: &str) -> Option<String> {
        let name = validate::validate_name(name)?;
        self.table.get(name).cloned()
    }
}
