//! Digest computation error types

use crate::hashing::HashAlgorithm;
use thiserror::Error;

/// Errors raised while computing a digest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The digest primitive is not available in this build
    #[error("Hash algorithm '{algorithm}' is not available in this build")]
    AlgorithmUnavailable { algorithm: HashAlgorithm },
}

impl HashError {
    /// Create an algorithm unavailable error
    pub fn unavailable(algorithm: HashAlgorithm) -> Self {
        Self::AlgorithmUnavailable { algorithm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_algorithm() {
        let error = HashError::unavailable(HashAlgorithm::NTLM);
        assert_eq!(
            error.to_string(),
            "Hash algorithm 'NTLM' is not available in this build"
        );
    }
}
