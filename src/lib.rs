//! # wordbook
//!
//! Words tables and text resources parsed from line-oriented `key=value` sources.
//!
//! Three backends share the [`Words`] lookup trait:
//! - [`ArrayBackend`]: normalized lines scanned on every lookup
//! - [`MapBackend`]: a name to value map built once
//! - [`FileBackend`]: a seekable reader re-scanned on every lookup, behind a lock
//!
//! [`WithSuffix`] and [`WithAnnotation`] decorate any of them (or each other)
//! with category suffixes and value formatting.
pub mod words;

// Re-export the main types for convenience
pub use words::{
    annotation::WithAnnotation,
    collection::MapBackend,
    file::FileBackend,
    printf::Arg,
    repository::ArrayBackend,
    services::{find_by, get_by},
    suffix::WithSuffix,
    types::models::{Delimiters, Record, Suffix, DEFAULT_COMMENT, DEFAULT_SEPARATOR},
    Result, Words, WordsError,
};
