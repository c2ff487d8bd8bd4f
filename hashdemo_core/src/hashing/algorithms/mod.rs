//! Hash algorithm implementations

use super::registry::AlgorithmRegistry;

mod md5;
#[cfg(feature = "ntlm")]
mod ntlm;
mod sha1;

/// Register all built-in algorithms with the registry
pub(crate) fn register_all(registry: &mut AlgorithmRegistry) {
    registry.register(md5::Md5Algorithm);
    registry.register(sha1::Sha1Algorithm);
    #[cfg(feature = "ntlm")]
    registry.register(ntlm::NtlmAlgorithm);
}
