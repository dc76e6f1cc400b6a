//! Core error types

use thiserror::Error;

/// Errors surfaced while loading dictionaries or hyphenating words
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure reading a dictionary source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream was read in full but could not be parsed as a dictionary
    #[error("failed to load hyphenation dictionary: {0}")]
    InvalidDictionary(String),

    /// Word at or over the fixed length bound
    #[error("word to be hyphenated ({word}) may have at most {limit} characters, has {length}")]
    WordTooLong {
        /// The offending word
        word: String,
        /// Its length in characters
        length: usize,
        /// Maximum permitted length
        limit: usize,
    },

    /// The library cannot treat the input as a single hyphenation unit
    #[error("cannot hyphenate word: {0}")]
    CannotHyphenate(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
