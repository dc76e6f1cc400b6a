//! Python bindings for pattern-based word hyphenation
//!
//! Exposes the wrapped library's dictionary loading and simple
//! (non-replacement) hyphenation routine to Python. There is no replacement
//! handling here, so only break-point markers are produced.

#![allow(non_local_definitions)]

use pyo3::prelude::*;

mod dictionary;
mod exceptions;

use dictionary::PyDictionary;

/// Load a hyphenation dictionary from a file descriptor which must have been
/// opened for binary reading
#[pyfunction]
fn load_dictionary(fd: i32) -> PyResult<PyDictionary> {
    PyDictionary::load_from_fd(fd)
}

/// Return the word with `=` markers inserted at permissible break points, or
/// raise ValueError
#[pyfunction]
fn simple_hyphenate(dictionary: &PyDictionary, word: &str, py: Python) -> PyResult<String> {
    // The dictionary is read-only during lookup; release the GIL while the
    // library runs.
    py.allow_threads(|| dictionary.hyphenate(word))
        .map_err(Into::into)
}

/// Main Python module for hyphen
#[pymodule]
fn hyphen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDictionary>()?;

    m.add_function(wrap_pyfunction!(load_dictionary, m)?)?;
    m.add_function(wrap_pyfunction!(simple_hyphenate, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Wrapper for the hyphenation library")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use hyphenation::{Language, Load, Standard};
    use pyo3::exceptions::{PyIOError, PyValueError};
    use tempfile::NamedTempFile;

    fn dictionary_file() -> NamedTempFile {
        let dict = Standard::from_embedded(Language::EnglishUS).unwrap();
        let raw = bincode::serialize(&dict).unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&raw).unwrap();
        file.flush().unwrap();
        file
    }

    #[cfg(unix)]
    fn fd_for(path: &std::path::Path) -> i32 {
        use std::os::unix::io::IntoRawFd;
        std::fs::File::open(path).unwrap().into_raw_fd()
    }

    #[test]
    fn test_module_builds() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let module = PyModule::new(py, "test_hyphen").unwrap();
            let result = hyphen(&module);
            assert!(result.is_ok());
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_load_dictionary_from_fd() {
        pyo3::prepare_freethreaded_python();
        let file = dictionary_file();
        let dict = load_dictionary(fd_for(file.path())).unwrap();
        assert_eq!(dict.hyphenate("hyphenation").unwrap(), "hy=phen=ation");
        assert_eq!(dict.language(), "EnglishUS");
    }

    #[test]
    fn test_wrong_handle_type_raises_typeerror() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let module = PyModule::new(py, "hyphen_test").unwrap();
            hyphen(&module).unwrap();
            let func = module.getattr("simple_hyphenate").unwrap();
            let err = func.call1(("not a dictionary", "word")).unwrap_err();
            assert!(err.is_instance_of::<pyo3::exceptions::PyTypeError>(py));
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_fd_raises_oserror() {
        pyo3::prepare_freethreaded_python();
        let Err(err) = load_dictionary(-1) else {
            panic!("loading from an invalid descriptor must fail");
        };
        Python::with_gil(|py| {
            assert!(err.is_instance_of::<PyIOError>(py));
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_corrupt_dictionary_raises_valueerror() {
        pyo3::prepare_freethreaded_python();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"garbage, not a dictionary").unwrap();
        file.flush().unwrap();

        let Err(err) = load_dictionary(fd_for(file.path())) else {
            panic!("loading garbage content must fail");
        };
        Python::with_gil(|py| {
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_simple_hyphenate_round_trip() {
        pyo3::prepare_freethreaded_python();
        let file = dictionary_file();
        let dict = load_dictionary(fd_for(file.path())).unwrap();
        Python::with_gil(|py| {
            let marked = simple_hyphenate(&dict, "photographer", py).unwrap();
            assert_eq!(marked.replace('=', ""), "photographer");
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_overlong_word_raises_valueerror() {
        pyo3::prepare_freethreaded_python();
        let file = dictionary_file();
        let dict = load_dictionary(fd_for(file.path())).unwrap();
        let word = "a".repeat(hyphen_core::MAX_WORD_LEN);
        Python::with_gil(|py| {
            let err = simple_hyphenate(&dict, &word, py).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_unhyphenatable_input_raises_valueerror() {
        pyo3::prepare_freethreaded_python();
        let file = dictionary_file();
        let dict = load_dictionary(fd_for(file.path())).unwrap();
        Python::with_gil(|py| {
            let err = simple_hyphenate(&dict, "two words", py).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }
}
