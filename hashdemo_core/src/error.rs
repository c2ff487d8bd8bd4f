//! Error types for the hashdemo core library
//!
//! Errors are grouped by where they come from: digest computation, file
//! access, input validation, and the background search worker.

use thiserror::Error;

pub mod hash;
pub mod io;
pub mod validation;

pub use self::hash::HashError;
pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hashdemo core library
#[derive(Error, Debug)]
pub enum Error {
    /// Digest computation errors
    #[error(transparent)]
    Hash(#[from] HashError),

    /// File system errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A session already has a search running
    #[error("A search is already in progress")]
    SearchInProgress,

    /// The background worker went away without delivering a result
    #[error("Search worker terminated before delivering a result")]
    WorkerLost,
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::HashAlgorithm;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_algorithm_unavailable_is_transparent() {
        let error = Error::from(HashError::unavailable(HashAlgorithm::NTLM));

        assert!(matches!(
            error,
            Error::Hash(HashError::AlgorithmUnavailable { .. })
        ));
        assert!(error.to_string().contains("NTLM"));
    }

    #[test]
    fn test_std_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error: Error = io_error.into();

        match error {
            Error::Io(io_err) => assert_eq!(io_err.kind, IoErrorKind::FileNotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_dictionary_path_in_message() {
        let error = Error::Io(IoError::file_not_found(Path::new("/no/such/words.txt")));
        assert!(error.to_string().contains("/no/such/words.txt"));
    }

    #[test]
    fn test_session_errors_display() {
        assert!(
            Error::SearchInProgress
                .to_string()
                .contains("already in progress")
        );
        assert!(Error::WorkerLost.to_string().contains("worker"));
    }
}
