//! Annotated values: token substitution and printf-style formatting at lookup time.
//!
//! A stored value may hold annotation tokens, an identifier wrapped in double
//! braces with optional inner spaces:
//!
//! ```text
//! greeting = Hi {{name}}, you are {{ age }} years old
//! pair     = {{1}},{{2}}
//! ```
//!
//! Tokens without a matching argument are left verbatim in the output.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::sync::OnceLock;

use log::trace;
use regex::{Captures, Regex};

use super::printf::{self, Arg};
use super::types::error::{Result, WordsError};
use super::Words;

static ANNOTATION_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached annotation token pattern.
fn annotation_regex() -> &'static Regex {
    ANNOTATION_PATTERN
        .get_or_init(|| Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("Invalid annotation regex pattern"))
}

/// Words table that formats found values with named, indexed or printf-style arguments.
///
/// A value that is found but empty is returned as is, without substitution.
/// Plain [`Words::find`] on this type returns the raw value.
#[derive(Debug, Clone)]
pub struct WithAnnotation<W> {
    words: W,
}

impl<W: Words> WithAnnotation<W> {
    /// Wraps `words`.
    ///
    /// # Errors
    /// Returns [`WordsError::WordsNil`] when `words` is `None`.
    pub fn new(words: impl Into<Option<W>>) -> Result<Self> {
        let words = words.into().ok_or(WordsError::WordsNil)?;
        Ok(Self { words })
    }

    /// Searches for a name and replaces `{{identifier}}` tokens with the matching arguments.
    ///
    /// Each argument is rendered through its `Display` impl. An empty map leaves
    /// every token untouched.
    pub fn find_named<K, V, S>(&self, name: &str, arguments: &HashMap<K, V, S>) -> Option<String>
    where
        K: Borrow<str> + Eq + Hash,
        V: Display,
        S: BuildHasher,
    {
        let value = self.words.find(name)?;
        if value.is_empty() {
            return Some(value);
        }
        Some(replace_tokens(&value, |identifier| arguments.get(identifier).map(ToString::to_string)))
    }

    pub fn get_named<K, V, S>(&self, name: &str, arguments: &HashMap<K, V, S>) -> String
    where
        K: Borrow<str> + Eq + Hash,
        V: Display,
        S: BuildHasher,
    {
        self.find_named(name, arguments).unwrap_or_default()
    }

    /// Searches for a name and replaces `{{1}}`, `{{2}}`, ... with the positional arguments.
    ///
    /// Extra arguments are ignored; tokens past the last argument stay verbatim.
    pub fn find_indexed<V: Display>(&self, name: &str, arguments: &[V]) -> Option<String> {
        let indexed: HashMap<String, String> = arguments
            .iter()
            .enumerate()
            .map(|(index, value)| ((index + 1).to_string(), value.to_string()))
            .collect();
        self.find_named(name, &indexed)
    }

    pub fn get_indexed<V: Display>(&self, name: &str, arguments: &[V]) -> String {
        self.find_indexed(name, arguments).unwrap_or_default()
    }

    /// Searches for a name and formats the value as a printf-style template.
    ///
    /// See [`printf`](super::printf) for the supported verbs and how
    /// mismatched arguments are rendered.
    pub fn find_formatted(&self, name: &str, arguments: &[Arg]) -> Option<String> {
        let value = self.words.find(name)?;
        if value.is_empty() {
            return Some(value);
        }
        Some(printf::sprintf(&value, arguments))
    }

    pub fn get_formatted(&self, name: &str, arguments: &[Arg]) -> String {
        self.find_formatted(name, arguments).unwrap_or_default()
    }

    pub fn inner(&self) -> &W {
        &self.words
    }

    pub fn into_inner(self) -> W {
        self.words
    }
}

impl<W: Words> Words for WithAnnotation<W> {
    fn find(&self, name: &str) -> Option<String> {
        self.words.find(name)
    }
}

fn replace_tokens(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    annotation_regex()
        .replace_all(input, |caps: &Captures<'_>| match lookup(&caps[1]) {
            Some(replacement) => replacement,
            None => {
                trace!("No argument for annotation '{}'", &caps[1]);
                caps[0].to_owned()
            }
        })
        .into_owned()
}
