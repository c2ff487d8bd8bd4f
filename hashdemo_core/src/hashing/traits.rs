//! Core trait for password hash schemes

use super::HashAlgorithm;
use std::borrow::Cow;

/// Core trait that all password hash schemes implement
pub trait PasswordHashAlgorithm: Send + Sync {
    /// The enum case this implementation serves
    fn algorithm(&self) -> HashAlgorithm;

    /// Display name for user interfaces
    fn display_name(&self) -> &'static str;

    /// Turn the password into the bytes the digest runs over
    fn encode<'a>(&self, plaintext: &'a str) -> Cow<'a, [u8]> {
        Cow::Borrowed(plaintext.as_bytes())
    }

    /// Digest raw bytes, rendered as lowercase hex
    fn hash_bytes(&self, data: &[u8]) -> String;

    /// Digest a plaintext password, rendered as lowercase hex
    fn digest(&self, plaintext: &str) -> String {
        self.hash_bytes(&self.encode(plaintext))
    }
}
