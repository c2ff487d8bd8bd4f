//! Password recovery searchers
//!
//! Two strategies share one scan loop: brute force enumerates every string
//! over an alphabet up to a length bound, dictionary streams a word list.
//! Each candidate is hashed and compared to the target; the first match wins.

use crate::hashing::{AlgorithmRegistry, HashAlgorithm, TargetDigest};
use crate::progress::{NullProvider, ProgressProvider};
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

mod brute_force;
mod dictionary;
mod scanner;

pub use brute_force::{
    BruteForceCandidates, BruteForceConfig, BruteForceSearch, DEFAULT_ALPHABET,
    DEFAULT_MAX_LENGTH, MAX_LENGTH_CEILING,
};
pub use tokio_util::sync::CancellationToken;
pub use dictionary::{DictionaryCandidates, DictionarySearch};

/// Default number of candidates between two progress reports
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 50_000;

/// How candidates are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Exhaustive enumeration over an alphabet
    BruteForce,
    /// Lines of a word list file
    Dictionary,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::BruteForce => write!(f, "Brute Force"),
            SearchMode::Dictionary => write!(f, "Dictionary"),
        }
    }
}

/// One search to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub target_digest: TargetDigest,
    pub algorithm: HashAlgorithm,
    pub mode: SearchMode,
    pub dictionary_path: Option<PathBuf>,
}

impl SearchRequest {
    /// Request a brute-force search
    pub fn brute_force(target_digest: TargetDigest, algorithm: HashAlgorithm) -> Self {
        Self {
            target_digest,
            algorithm,
            mode: SearchMode::BruteForce,
            dictionary_path: None,
        }
    }

    /// Request a dictionary search over the word list at `path`
    pub fn dictionary(
        target_digest: TargetDigest,
        algorithm: HashAlgorithm,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target_digest,
            algorithm,
            mode: SearchMode::Dictionary,
            dictionary_path: Some(path.into()),
        }
    }

    /// Check the request is complete before handing it to a worker
    ///
    /// Running an invalid request is still safe: a dictionary request
    /// without a path ends in [`Outcome::DictionaryReadError`].
    pub fn validate(&self) -> Result<(), crate::error::ValidationError> {
        if self.mode == SearchMode::Dictionary && self.dictionary_path.is_none() {
            return Err(crate::error::ValidationError::missing_field(
                "dictionary_path",
            ));
        }
        Ok(())
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "password", rename_all = "snake_case")]
pub enum Outcome {
    /// The plaintext whose digest matched
    Found(String),
    /// The word list was scanned without a match
    NotFound,
    /// Every candidate up to the length bound was tried without a match
    SearchSpaceExceeded,
    /// The word list could not be opened or read
    DictionaryReadError,
    /// The search was cancelled before it finished
    Cancelled,
    /// The digest algorithm is not available in this build
    AlgorithmUnavailable,
}

impl Outcome {
    /// Human readable label for presentation
    pub fn label(&self) -> &str {
        match self {
            Outcome::Found(password) => password,
            Outcome::NotFound => "Not Found in Dictionary",
            Outcome::SearchSpaceExceeded => "Not Found (Search Space Too Large)",
            Outcome::DictionaryReadError => "Dictionary Error",
            Outcome::Cancelled => "Cancelled",
            Outcome::AlgorithmUnavailable => "Algorithm Unavailable",
        }
    }

    /// The recovered password, if any
    pub fn password(&self) -> Option<&str> {
        match self {
            Outcome::Found(password) => Some(password),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one search invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub outcome: Outcome,
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
    pub algorithm: HashAlgorithm,
    pub mode: SearchMode,
    pub candidates_tried: u64,
    /// Candidates skipped because their digest could not be computed
    pub hash_failures: u64,
}

impl SearchResult {
    /// A result for a search that ended before trying any candidate
    pub fn immediate(outcome: Outcome, algorithm: HashAlgorithm, mode: SearchMode) -> Self {
        Self {
            outcome,
            elapsed: Duration::ZERO,
            algorithm,
            mode,
            candidates_tried: 0,
            hash_failures: 0,
        }
    }

    /// Wall-clock time in fractional seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn serialize_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Everything a searcher needs besides the target
#[derive(Clone)]
pub struct SearchContext {
    pub registry: Arc<AlgorithmRegistry>,
    pub progress: Arc<dyn ProgressProvider>,
    pub cancellation: CancellationToken,
    pub progress_interval: u64,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self {
            registry: Arc::new(AlgorithmRegistry::with_builtins()),
            progress: Arc::new(NullProvider),
            cancellation: CancellationToken::new(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SearchContext {
    pub fn with_registry(mut self, registry: Arc<AlgorithmRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressProvider>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Candidates between progress reports; zero disables reporting
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

impl std::fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchContext")
            .field("registry", &self.registry)
            .field("cancelled", &self.cancellation.is_cancelled())
            .field("progress_interval", &self.progress_interval)
            .finish()
    }
}

/// A way of producing and testing candidates
pub trait SearchStrategy: Send + Sync {
    /// Which mode this strategy implements
    fn mode(&self) -> SearchMode;

    /// Run to a match, exhaustion, failure or cancellation
    fn search(
        &self,
        target: &TargetDigest,
        algorithm: HashAlgorithm,
        context: &SearchContext,
    ) -> SearchResult;
}

/// Brute-force search with the default alphabet and length bound
pub fn brute_force(target_digest: &str, algorithm: HashAlgorithm) -> SearchResult {
    BruteForceSearch::default().search(
        &TargetDigest::new(target_digest),
        algorithm,
        &SearchContext::default(),
    )
}

/// Dictionary search over the word list at `dictionary_path`
pub fn dictionary(
    target_digest: &str,
    algorithm: HashAlgorithm,
    dictionary_path: &Path,
) -> SearchResult {
    DictionarySearch::new(dictionary_path).search(
        &TargetDigest::new(target_digest),
        algorithm,
        &SearchContext::default(),
    )
}
