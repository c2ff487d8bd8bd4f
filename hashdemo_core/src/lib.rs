//! hashdemo Core Library
//!
//! Demonstrates how quickly weak passwords fall to brute-force and
//! dictionary attacks: hash a candidate, compare it to a target digest,
//! repeat. Provides the digest schemes, the two search strategies and an
//! orchestrator that runs a search off the caller's thread.

pub mod error;
pub mod hashing;
pub mod orchestrator;
pub mod progress;
pub mod search;

// Re-export main types
pub use error::{Error, HashError, Result};
pub use hashing::{AlgorithmRegistry, HashAlgorithm, PasswordHashAlgorithm, TargetDigest, hash};
pub use orchestrator::{DemoOrchestrator, SearchHandle, SearchSession};
pub use progress::{LogProvider, NullProvider, ProgressProvider, ProgressUpdate};
pub use search::{
    BruteForceConfig, BruteForceSearch, CancellationToken, DictionarySearch, Outcome,
    SearchContext, SearchMode, SearchRequest, SearchResult, SearchStrategy,
};
