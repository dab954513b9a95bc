//! Suffixed lookups over any words table.

use super::format::validate;
use super::types::error::{Result, WordsError};
use super::types::models::Suffix;
use super::Words;

/// Categorized words table: appends a fixed suffix to every looked up name.
///
/// With a source holding `k1_EN` and `k1_FA`, a `WithSuffix` over `_EN`
/// resolves `k1` to the English value.
#[derive(Debug, Clone)]
pub struct WithSuffix<W> {
    words: W,
    suffix: String,
}

impl<W: Words> WithSuffix<W> {
    /// Wraps `words` with a trimmed `suffix`.
    ///
    /// # Errors
    /// - [`WordsError::WordsNil`] when `words` is `None`
    /// - [`WordsError::SuffixInvalid`] when the suffix is empty after trimming or spans lines
    pub fn new(words: impl Into<Option<W>>, suffix: impl Into<Suffix>) -> Result<Self> {
        let words = words.into().ok_or(WordsError::WordsNil)?;
        let suffix = suffix.into();
        let suffix = validate::validate_suffix(suffix.as_str()).ok_or(WordsError::SuffixInvalid)?;
        Ok(Self {
            words,
            suffix: suffix.to_owned(),
        })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn inner(&self) -> &W {
        &self.words
    }

    pub fn into_inner(self) -> W {
        self.words
    }
}

impl<W: Words> Words for WithSuffix<W> {
    fn find(&self, name: &str) -> Option<String> {
        self.words.find(&format!("{name}{}", self.suffix))
    }
}
