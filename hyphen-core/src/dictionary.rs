//! Dictionary handles and the simple hyphenation routine
//!
//! All algorithmic content (pattern matching, dictionary parsing, break-point
//! computation) lives in the wrapped `hyphenation` library. This module only
//! marshals: bytes in, an owned handle out; a word in, a marked string out.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hyphenation::{Hyphenator, Language, Load, Standard};

use crate::error::{Error, Result};

/// Maximum supported word length in characters. Words must be strictly
/// shorter; the bound mirrors the fixed word buffer of classic pattern
/// hyphenators.
pub const MAX_WORD_LEN: usize = 100;

/// Marker character inserted at permissible break points.
pub const MARKER: char = '=';

/// An owned, loaded set of hyphenation patterns for one language.
///
/// Loading is the expensive step; a `Dictionary` is read-only afterwards and
/// may be shared freely across hyphenation calls. It is released exactly once
/// on drop.
#[derive(Debug)]
pub struct Dictionary {
    inner: Standard,
}

impl Dictionary {
    /// Load a dictionary from a byte stream.
    ///
    /// The stream is consumed in full before parsing, so read failures
    /// surface as [`Error::Io`] and malformed content as
    /// [`Error::InvalidDictionary`]. The caller's scope releases the stream
    /// either way.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let mut bytes: &[u8] = &raw;
        let inner = Standard::any_from_reader(&mut bytes)
            .map_err(|e| Error::InvalidDictionary(e.to_string()))?;
        tracing::debug!(
            language = ?inner.language(),
            bytes = raw.len(),
            "loaded hyphenation dictionary"
        );
        Ok(Self { inner })
    }

    /// Load a dictionary from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::from_reader(&mut reader)
    }

    /// Load one of the dictionaries embedded in the wrapped library.
    pub fn from_embedded(language: Language) -> Result<Self> {
        let inner = Standard::from_embedded(language)
            .map_err(|e| Error::InvalidDictionary(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Language this dictionary was compiled for.
    pub fn language(&self) -> Language {
        self.inner.language()
    }

    /// Hyphenate `word` with the simple (non-replacement) algorithm,
    /// inserting [`MARKER`] at each permissible break point.
    ///
    /// Stripping all markers from the result reproduces the input exactly.
    /// Fails with [`Error::WordTooLong`] for words of [`MAX_WORD_LEN`]
    /// characters or more, and with [`Error::CannotHyphenate`] for input
    /// that is not a single word (empty, or containing whitespace or
    /// control characters).
    pub fn hyphenate_simple(&self, word: &str) -> Result<String> {
        let length = word.chars().count();
        if length >= MAX_WORD_LEN {
            return Err(Error::WordTooLong {
                word: word.to_string(),
                length,
                limit: MAX_WORD_LEN - 1,
            });
        }
        if word.is_empty() || word.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::CannotHyphenate(word.to_string()));
        }
        let breaks = self.inner.hyphenate(word).breaks;
        Ok(mark_breaks(word, &breaks))
    }
}

/// Insert [`MARKER`] immediately before each break offset.
///
/// Offsets are byte positions on character boundaries, ascending, as
/// produced by the library.
fn mark_breaks(word: &str, breaks: &[usize]) -> String {
    let mut marked = String::with_capacity(word.len() + breaks.len());
    let mut rest = 0;
    for &at in breaks {
        marked.push_str(&word[rest..at]);
        marked.push(MARKER);
        rest = at;
    }
    marked.push_str(&word[rest..]);
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_breaks_inserts_markers_before_offsets() {
        assert_eq!(mark_breaks("hyphenation", &[2, 6]), "hy=phen=ation");
    }

    #[test]
    fn mark_breaks_without_offsets_is_identity() {
        assert_eq!(mark_breaks("cat", &[]), "cat");
    }

    #[test]
    fn mark_breaks_handles_multibyte_boundaries() {
        // break after "küs" (byte offset 4, 'ü' is two bytes)
        assert_eq!(mark_breaks("küste", &[4]), "küs=te");
    }
}
