//! Target digest normalization

use super::HashAlgorithm;
use crate::error::ValidationError;
use serde::Serialize;

/// A hex digest the searchers try to reproduce
///
/// Stored trimmed and lowercased so comparisons against freshly computed
/// digests are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetDigest(String);

impl TargetDigest {
    /// Normalize a digest without checking its shape
    ///
    /// A malformed digest is still a valid search target, it just never
    /// matches anything.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_ascii_lowercase())
    }

    /// Normalize a digest and check it could have come from `algorithm`
    pub fn parse(raw: &str, algorithm: HashAlgorithm) -> Result<Self, ValidationError> {
        let digest = Self::new(raw);

        if digest.0.is_empty() {
            return Err(ValidationError::missing_field("hash"));
        }
        if !digest.0.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_digest(
                raw,
                "expected hexadecimal characters only",
            ));
        }
        if digest.0.len() != algorithm.hex_len() {
            return Err(ValidationError::invalid_digest(
                raw,
                &format!(
                    "{algorithm} digests are {} hex characters, got {}",
                    algorithm.hex_len(),
                    digest.0.len()
                ),
            ));
        }

        Ok(digest)
    }

    /// The normalized digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a computed digest
    pub fn matches(&self, digest: &str) -> bool {
        self.0.eq_ignore_ascii_case(digest)
    }
}

impl std::fmt::Display for TargetDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
