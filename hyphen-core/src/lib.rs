//! Safe wrapper around pattern-based word hyphenation
//!
//! This crate binds the external `hyphenation` library behind a small owned
//! handle: load a dictionary once, then hyphenate words against it. The
//! pattern algorithm, dictionary format and trie construction all belong to
//! the wrapped library; this crate only converts between its types and plain
//! strings with `=` markers at break points.

#![warn(missing_docs)]

pub mod dictionary;
pub mod error;

// Re-export key types
pub use dictionary::{Dictionary, MARKER, MAX_WORD_LEN};
pub use error::{Error, Result};
pub use hyphenation::Language;

/// Hyphenate a word against a loaded dictionary (convenience function).
///
/// Equivalent to [`Dictionary::hyphenate_simple`].
pub fn simple_hyphenate(dictionary: &Dictionary, word: &str) -> Result<String> {
    dictionary.hyphenate_simple(word)
}
