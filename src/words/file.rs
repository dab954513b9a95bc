//! File backed words table.
//!
//! The backend keeps a caller supplied reader (typically a `&File` the caller
//! owns and closes) and re-scans it from the start on every lookup. Content
//! is not read on construction; use [`FileBackend::check_error`] to validate
//! the whole file explicitly.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace, warn};

use super::format::{line, validate};
use super::types::error::{Result, WordsError};
use super::types::models::Delimiters;
use super::Words;

/// Words table reading a seekable source on every lookup.
///
/// [`Words::find`] is safe for concurrent use: it holds an internal lock for
/// the whole seek-and-scan. [`FileBackend::find_unsafe`] skips the lock and
/// takes `&mut self` instead, so a caller that already serializes access
/// (through its own lock or by owning the backend) can avoid the overhead.
///
/// Lookup failures (seek or read errors, invalid UTF-8, malformed lines) do
/// not surface from `find`; they make it return `None` and are recorded as
/// the last error, available through [`FileBackend::err`]. The recorded error
/// is sticky: a later successful lookup does not clear it.
#[derive(Debug)]
pub struct FileBackend<R> {
    state: Mutex<FileState<R>>,
    delimiters: Delimiters,
}

#[derive(Debug)]
struct FileState<R> {
    reader: R,
    fault: Option<Arc<WordsError>>,
}

impl<R: Read + Seek> FileBackend<R> {
    /// Wraps `reader` with the given separator and comment characters.
    ///
    /// Only the delimiters are validated; the content is read lazily.
    pub fn new(reader: R, separator: char, comment: char) -> Result<Self> {
        let delimiters = Delimiters::new(separator, comment)?;
        Ok(Self::with_delimiters(reader, delimiters))
    }

    /// Wraps `reader` with an already validated delimiter pair.
    pub fn with_delimiters(reader: R, delimiters: Delimiters) -> Self {
        debug!(
            "File words table created: separator '{}', comment '{}'",
            delimiters.separator(),
            delimiters.comment()
        );
        Self {
            state: Mutex::new(FileState { reader, fault: None }),
            delimiters,
        }
    }

    /// Searches for a name without taking the internal lock.
    ///
    /// The exclusive borrow is the only synchronization; thread safety is the
    /// caller's responsibility. Errors are recorded exactly as in [`Words::find`].
    pub fn find_unsafe(&mut self, name: &str) -> Option<String> {
        let delimiters = self.delimiters;
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        state.find(name, delimiters)
    }

    /// Scans the whole source, validating every line and rejecting duplicated names.
    ///
    /// Does not touch the last recorded error.
    pub fn check_error(&self) -> Result<()> {
        let mut state = self.lock();
        state.reader.seek(SeekFrom::Start(0))?;

        let mut names = HashSet::new();
        let reader = BufReader::new(&mut state.reader);
        for raw in reader.lines() {
            let raw = raw?;
            match line::parse_line(&raw, self.delimiters.separator(), self.delimiters.comment()) {
                Ok(record) => {
                    if !names.insert(record.key.to_owned()) {
                        return Err(WordsError::NameDuplicated { name: record.key.to_owned() });
                    }
                }
                Err(e) if e.is_skip() => continue,
                Err(e) => return Err(e),
            }
        }
        debug!("File words table checked: {} records", names.len());
        Ok(())
    }

    /// Returns the error recorded by the last failed lookup, if any.
    pub fn err(&self) -> Option<Arc<WordsError>> {
        self.lock().fault.clone()
    }

    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Consumes the backend and hands the reader back.
    pub fn into_inner(self) -> R {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner).reader
    }

    fn lock(&self) -> MutexGuard<'_, FileState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<'a> FileBackend<&'a File> {
    /// Wraps a borrowed file after checking that it is present and non-empty.
    ///
    /// # Errors
    /// - [`WordsError::FileNil`] when `file` is `None`
    /// - [`WordsError::FileEmpty`] when the file has zero length
    /// - [`WordsError::Io`] when the file metadata cannot be read
    /// - any delimiter error from [`Delimiters::new`]
    pub fn from_file(file: Option<&'a File>, separator: char, comment: char) -> Result<Self> {
        let file = validate::validate_file(file)?;
        Self::new(file, separator, comment)
    }
}

impl<R: Read + Seek> FileState<R> {
    fn find(&mut self, name: &str, delimiters: Delimiters) -> Option<String> {
        let name = validate::validate_name(name)?;
        match self.scan(name, delimiters) {
            Ok(value) => value,
            Err(e) => {
                warn!("Lookup of '{}' failed: {}", name, e);
                self.fault = Some(Arc::new(e));
                None
            }
        }
    }

    fn scan(&mut self, name: &str, delimiters: Delimiters) -> Result<Option<String>> {
        self.reader.seek(SeekFrom::Start(0))?;
        trace!("Scanning file for '{}'", name);

        let reader = BufReader::new(&mut self.reader);
        for raw in reader.lines() {
            let raw = raw?;
            match line::parse_line(&raw, delimiters.separator(), delimiters.comment()) {
                Ok(record) if record.key == name => return Ok(Some(record.value.to_owned())),
                Ok(_) => continue,
                Err(e) if e.is_skip() => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }
}

impl<R: Read + Seek> Words for FileBackend<R> {
    fn find(&self, name: &str) -> Option<String> {
        self.lock().find(name, self.delimiters)
    }
}
