//! Dictionary handle Python interface

use std::fs::File;
use std::io::BufReader;

use hyphen_core::Dictionary;
use pyo3::prelude::*;

use crate::exceptions::InternalError;

/// Opaque handle to a loaded hyphenation dictionary
///
/// Owns the library-side dictionary structure; the memory is released
/// exactly once, when the Python object is collected. The handle is
/// read-only after loading and safe to share across hyphenation calls.
#[pyclass(name = "Dictionary")]
pub struct PyDictionary {
    inner: Dictionary,
}

impl PyDictionary {
    /// Load a dictionary from an OS file descriptor opened for binary
    /// reading. Takes ownership of the descriptor: it is closed when
    /// loading finishes, whether or not it succeeds.
    pub(crate) fn load_from_fd(fd: i32) -> PyResult<Self> {
        let mut reader = BufReader::new(file_from_fd(fd));
        let inner = Dictionary::from_reader(&mut reader).map_err(InternalError::from)?;
        Ok(Self { inner })
    }

    pub(crate) fn hyphenate(&self, word: &str) -> Result<String, InternalError> {
        self.inner.hyphenate_simple(word).map_err(InternalError::from)
    }
}

#[cfg(unix)]
fn file_from_fd(fd: i32) -> File {
    use std::os::unix::io::FromRawFd;
    // The caller hands over the descriptor; an invalid or already-closed one
    // surfaces as an I/O error on the first read, not a crash.
    unsafe { File::from_raw_fd(fd) }
}

#[cfg(windows)]
fn file_from_fd(fd: i32) -> File {
    use std::os::windows::io::{FromRawHandle, RawHandle};
    // CRT descriptors must be translated to OS handles first.
    let handle = unsafe { libc::get_osfhandle(fd) };
    unsafe { File::from_raw_handle(handle as RawHandle) }
}

#[pymethods]
impl PyDictionary {
    /// Language the dictionary was compiled for
    #[getter]
    pub(crate) fn language(&self) -> String {
        format!("{:?}", self.inner.language())
    }

    fn __repr__(&self) -> String {
        format!("Dictionary(language='{:?}')", self.inner.language())
    }
}
