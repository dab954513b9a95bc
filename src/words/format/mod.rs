//! Parsing of words sources.
//!
//! - [`validate`]: source, delimiter, name, suffix and file checks
//! - [`line`]: one line into a record
//! - [`normalize`]: a whole source into normalized lines, plus duplicate detection

pub mod line;
pub mod normalize;
pub mod validate;
