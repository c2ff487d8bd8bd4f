//! MD5 password hash

use crate::hashing::HashAlgorithm;
use crate::hashing::traits::PasswordHashAlgorithm;
use md5::{Digest, Md5};

pub struct Md5Algorithm;

impl PasswordHashAlgorithm for Md5Algorithm {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::MD5
    }

    fn display_name(&self) -> &'static str {
        "MD5"
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        format!("{:x}", Md5::digest(data))
    }
}
