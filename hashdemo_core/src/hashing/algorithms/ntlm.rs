//! NTLM password hash: MD4 over the UTF-16LE encoding of the password

use crate::hashing::HashAlgorithm;
use crate::hashing::traits::PasswordHashAlgorithm;
use md4::{Digest, Md4};
use std::borrow::Cow;

pub struct NtlmAlgorithm;

impl PasswordHashAlgorithm for NtlmAlgorithm {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::NTLM
    }

    fn display_name(&self) -> &'static str {
        "NTLM"
    }

    fn encode<'a>(&self, plaintext: &'a str) -> Cow<'a, [u8]> {
        Cow::Owned(
            plaintext
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect(),
        )
    }

    fn hash_bytes(&self, data: &[u8]) -> String {
        format!("{:x}", Md4::digest(data))
    }
}
