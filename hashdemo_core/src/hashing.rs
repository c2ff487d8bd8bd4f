//! Password digest calculation
//!
//! Every supported scheme is a [`PasswordHashAlgorithm`] registered in the
//! [`AlgorithmRegistry`]. Callers pick a scheme through the closed
//! [`HashAlgorithm`] enum and get lowercase hex digests back.

use crate::{
    Error, Result,
    error::{HashError, ValidationError},
};
use serde::{Deserialize, Serialize};

mod algorithms;
mod digest;
mod registry;
mod traits;

pub use digest::TargetDigest;
pub use registry::AlgorithmRegistry;
pub use traits::PasswordHashAlgorithm;

/// Password hash schemes supported by the demonstrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// MD5 over the UTF-8 bytes of the password
    MD5,
    /// SHA1 over the UTF-8 bytes of the password
    SHA1,
    /// MD4 over the UTF-16LE encoding of the password
    NTLM,
}

impl HashAlgorithm {
    /// All supported algorithms, in display order
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::MD5,
        HashAlgorithm::SHA1,
        HashAlgorithm::NTLM,
    ];

    /// Lowercase identifier used in configuration and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            HashAlgorithm::MD5 => "md5",
            HashAlgorithm::SHA1 => "sha1",
            HashAlgorithm::NTLM => "ntlm",
        }
    }

    /// Number of hex characters in a digest of this algorithm
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::MD5 | HashAlgorithm::NTLM => 32,
            HashAlgorithm::SHA1 => 40,
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::MD5 => write!(f, "MD5"),
            HashAlgorithm::SHA1 => write!(f, "SHA1"),
            HashAlgorithm::NTLM => write!(f, "NTLM"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::MD5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::SHA1),
            "ntlm" => Ok(HashAlgorithm::NTLM),
            _ => Err(Error::Validation(ValidationError::invalid_configuration(
                &format!("Unknown hash algorithm: {s}"),
            ))),
        }
    }
}

/// Hash a plaintext password with the given algorithm
///
/// Uses the global registry; fails with [`HashError::AlgorithmUnavailable`]
/// when the build does not provide the primitive (NTLM without the `ntlm`
/// feature).
pub fn hash(plaintext: &str, algorithm: HashAlgorithm) -> std::result::Result<String, HashError> {
    AlgorithmRegistry::global().hash(plaintext, algorithm)
}
