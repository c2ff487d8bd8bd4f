//! SHA1 password hash

use crate::hashing::HashAlgorithm;
use crate::hashing::traits::PasswordHashAlgorithm;
use sha1::{Digest, Sha1};

pub struct Sha1Algorithm;

impl PasswordHashAlgorithm for Sha1Algorithm {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::SHA1
    }

    fn display_name(&self) -> &'static str {
        "SHA1"
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        format!("{:x}", Sha1::digest(data))
    }
}
