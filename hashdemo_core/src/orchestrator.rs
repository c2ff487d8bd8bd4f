//! Search orchestration
//!
//! The orchestrator picks a strategy for a [`SearchRequest`], runs it on a
//! blocking worker thread and hands the single [`SearchResult`] back over a
//! one-shot channel. [`SearchSession`] adds the "one search at a time" rule an
//! interactive front end needs.

use crate::hashing::AlgorithmRegistry;
use crate::progress::{NullProvider, ProgressProvider, ProgressUpdate};
use crate::search::{
    BruteForceConfig, BruteForceSearch, CancellationToken, DEFAULT_PROGRESS_INTERVAL,
    DictionarySearch, Outcome, SearchContext, SearchMode, SearchRequest, SearchResult,
    SearchStrategy,
};
use crate::{Error, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;

/// Dispatches search requests to the matching strategy
#[derive(Clone)]
pub struct DemoOrchestrator {
    brute_force: BruteForceConfig,
    registry: Arc<AlgorithmRegistry>,
    progress: Arc<dyn ProgressProvider>,
    progress_interval: u64,
}

impl Default for DemoOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DemoOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoOrchestrator")
            .field("brute_force", &self.brute_force)
            .field("registry", &self.registry)
            .field("progress_interval", &self.progress_interval)
            .finish()
    }
}

impl DemoOrchestrator {
    /// Create an orchestrator with the default alphabet, length bound and
    /// built-in algorithms
    pub fn new() -> Self {
        Self {
            brute_force: BruteForceConfig::default(),
            registry: Arc::new(AlgorithmRegistry::with_builtins()),
            progress: Arc::new(NullProvider),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_brute_force_config(mut self, config: BruteForceConfig) -> Self {
        self.brute_force = config;
        self
    }

    pub fn with_registry(mut self, registry: Arc<AlgorithmRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressProvider>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    fn strategy_for(&self, request: &SearchRequest) -> Box<dyn SearchStrategy> {
        match request.mode {
            SearchMode::BruteForce => Box::new(BruteForceSearch::new(self.brute_force.clone())),
            SearchMode::Dictionary => match &request.dictionary_path {
                Some(path) => Box::new(DictionarySearch::new(path)),
                None => Box::new(DictionarySearch::without_path()),
            },
        }
    }

    /// Run a request on the calling thread
    ///
    /// Blocks until the strategy finishes; [`spawn`](Self::spawn) and
    /// [`run`](Self::run) move this onto a worker.
    pub fn execute(&self, request: &SearchRequest, cancellation: &CancellationToken) -> SearchResult {
        if !self.registry.is_available(request.algorithm) {
            warn!(
                "{} is not available in this build, skipping search",
                request.algorithm
            );
            return SearchResult::immediate(
                Outcome::AlgorithmUnavailable,
                request.algorithm,
                request.mode,
            );
        }

        let strategy = self.strategy_for(request);
        let context = SearchContext {
            registry: Arc::clone(&self.registry),
            progress: Arc::clone(&self.progress),
            cancellation: cancellation.clone(),
            progress_interval: self.progress_interval,
        };

        self.progress.report(ProgressUpdate::Status {
            message: format!("Running {} search", strategy.mode()),
        });
        let result = strategy.search(&request.target_digest, request.algorithm, &context);

        info!(
            "{} search for {} digest finished: {} in {:.2}s",
            result.mode,
            result.algorithm,
            result.outcome,
            result.elapsed_seconds()
        );
        result
    }

    /// Start a request on a blocking worker and return immediately
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(&self, request: SearchRequest) -> SearchHandle {
        self.spawn_with_guard(request, ())
    }

    /// Run a request on a blocking worker and wait for its result
    pub async fn run(&self, request: SearchRequest) -> Result<SearchResult> {
        self.spawn(request).wait().await
    }

    /// Spawn the worker, dropping `guard` once the result is ready
    fn spawn_with_guard<G: Send + 'static>(&self, request: SearchRequest, guard: G) -> SearchHandle {
        let (tx, rx) = oneshot::channel();
        let cancellation = CancellationToken::new();
        let worker_cancellation = cancellation.clone();
        let orchestrator = self.clone();

        debug!("Spawning {} search worker", request.mode);
        tokio::task::spawn_blocking(move || {
            let result = orchestrator.execute(&request, &worker_cancellation);
            drop(guard);
            if tx.send(result).is_err() {
                debug!("Search result dropped, nobody is waiting for it");
            }
        });

        SearchHandle {
            cancellation,
            result: rx,
        }
    }
}

/// Handle to a search running on a worker
#[derive(Debug)]
pub struct SearchHandle {
    cancellation: CancellationToken,
    result: oneshot::Receiver<SearchResult>,
}

impl SearchHandle {
    /// Ask the worker to stop at the next candidate
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Token that cancels this search, for handing to signal handlers
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Wait for the worker to deliver its result
    pub async fn wait(self) -> Result<SearchResult> {
        self.result.await.map_err(|_| Error::WorkerLost)
    }
}

/// Clears the session's in-flight flag when dropped
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Orchestrator wrapper that allows at most one search in flight
#[derive(Debug)]
pub struct SearchSession {
    orchestrator: DemoOrchestrator,
    in_flight: Arc<AtomicBool>,
}

impl SearchSession {
    pub fn new(orchestrator: DemoOrchestrator) -> Self {
        Self {
            orchestrator,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a search started from this session is still running
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Start a search unless one is already running
    pub fn start(&self, request: SearchRequest) -> Result<SearchHandle> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::SearchInProgress);
        }

        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        Ok(self.orchestrator.spawn_with_guard(request, guard))
    }
}
