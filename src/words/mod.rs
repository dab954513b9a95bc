//! Core words table module

pub mod annotation;
pub mod collection;
pub mod file;
pub mod format;
pub mod printf;
pub mod repository;
pub mod services;
pub mod suffix;
pub mod types;

use std::sync::Arc;

pub use types::error::{Result, WordsError};

/// A words table: looks up the value stored for a name.
///
/// Implemented by the three backends ([`ArrayBackend`](repository::ArrayBackend),
/// [`MapBackend`](collection::MapBackend), [`FileBackend`](file::FileBackend))
/// and by the decorators ([`WithSuffix`](suffix::WithSuffix),
/// [`WithAnnotation`](annotation::WithAnnotation)), so decorators compose over
/// any backend and over each other.
///
/// Names are trimmed before lookup; an empty or multi-line name is never found.
pub trait Words {
    /// Searches for a name, returning its value if found.
    fn find(&self, name: &str) -> Option<String>;

    /// Searches for a name, returning its value or an empty string if not found.
    fn get(&self, name: &str) -> String {
        self.find(name).unwrap_or_default()
    }
}

impl<W: Words + ?Sized> Words for &W {
    fn find(&self, name: &str) -> Option<String> {
        (**self).find(name)
    }
}

impl<W: Words + ?Sized> Words for Box<W> {
    fn find(&self, name: &str) -> Option<String> {
        (**self).find(name)
    }
}

impl<W: Words + ?Sized> Words for Arc<W> {
    fn find(&self, name: &str) -> Option<String> {
        (**self).find(name)
    }
}
