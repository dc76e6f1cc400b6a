//! Error translation for the Python bindings
//!
//! Core errors map onto Python builtins rather than a custom hierarchy:
//! the module's callers match on `OSError` / `ValueError`, and argument
//! type errors are raised by pyo3 extraction itself.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use thiserror::Error;

/// Internal error enum bridging core errors to Python exceptions
#[derive(Error, Debug)]
pub enum InternalError {
    #[error("{0}")]
    Io(String),

    #[error("Failed to load hyphen dictionary from the specified file: {0}")]
    InvalidDictionary(String),

    #[error("{0}")]
    InvalidWord(String),
}

impl From<hyphen_core::Error> for InternalError {
    fn from(err: hyphen_core::Error) -> Self {
        use hyphen_core::Error;
        match err {
            Error::Io(e) => InternalError::Io(e.to_string()),
            Error::InvalidDictionary(msg) => InternalError::InvalidDictionary(msg),
            Error::WordTooLong { .. } | Error::CannotHyphenate(_) => {
                InternalError::InvalidWord(err.to_string())
            }
        }
    }
}

impl From<InternalError> for PyErr {
    fn from(err: InternalError) -> PyErr {
        match err {
            InternalError::Io(msg) => PyIOError::new_err(msg),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}
