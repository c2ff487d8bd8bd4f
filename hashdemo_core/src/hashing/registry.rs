//! Central registry for password hash implementations

use super::traits::PasswordHashAlgorithm;
use super::HashAlgorithm;
use crate::error::HashError;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps each [`HashAlgorithm`] to the implementation this build provides
#[derive(Default)]
pub struct AlgorithmRegistry {
    algorithms: HashMap<HashAlgorithm, Arc<dyn PasswordHashAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every algorithm compiled into this build
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        super::algorithms::register_all(&mut registry);
        registry
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(Self::with_builtins)
    }

    /// Register an implementation, replacing any previous one for its algorithm
    pub fn register(&mut self, algorithm: impl PasswordHashAlgorithm + 'static) {
        self.algorithms
            .insert(algorithm.algorithm(), Arc::new(algorithm));
    }

    /// Look up the implementation for an algorithm
    pub fn resolve(
        &self,
        algorithm: HashAlgorithm,
    ) -> Result<Arc<dyn PasswordHashAlgorithm>, HashError> {
        self.algorithms
            .get(&algorithm)
            .cloned()
            .ok_or_else(|| HashError::unavailable(algorithm))
    }

    /// Whether this registry can compute the algorithm
    pub fn is_available(&self, algorithm: HashAlgorithm) -> bool {
        self.algorithms.contains_key(&algorithm)
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str, algorithm: HashAlgorithm) -> Result<String, HashError> {
        self.resolve(algorithm).map(|imp| imp.digest(plaintext))
    }

    /// List available algorithms in display order
    pub fn list(&self) -> Vec<HashAlgorithm> {
        HashAlgorithm::ALL
            .into_iter()
            .filter(|algorithm| self.is_available(*algorithm))
            .collect()
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("algorithms", &self.list())
            .finish()
    }
}
