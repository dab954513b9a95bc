//! One-off suffixed lookups without building a [`WithSuffix`](super::suffix::WithSuffix).

use super::format::validate;
use super::Words;

/// Searches for `name + suffix`, returning the value or `None`.
///
/// An invalid suffix (empty after trimming, or multi-line) is never found.
pub fn find_by<W: Words + ?Sized>(words: &W, name: &str, suffix: impl AsRef<str>) -> Option<String> {
    let suffix = validate::validate_suffix(suffix.as_ref())?;
    words.find(&format!("{name}{suffix}"))
}

/// Searches for `name + suffix`, returning the value or an empty string.
pub fn get_by<W: Words + ?Sized>(words: &W, name: &str, suffix: impl AsRef<str>) -> String {
    find_by(words, name, suffix).unwrap_or_default()
}
