//! Crack command orchestrator
//!
//! Validates the user's input, runs one search on a background worker while
//! the progress display and Ctrl-C handler stay responsive, and hands back
//! the result for formatting.

use crate::config::AppConfig;
use crate::error::{CliError, CliResult, ErrorContext};
use crate::progress::{create_progress_infrastructure, render_progress};
use colored::*;
use hashdemo_core::{
    BruteForceConfig, DemoOrchestrator, HashAlgorithm, LogProvider, ProgressProvider,
    SearchMode, SearchRequest, SearchResult, SearchSession, TargetDigest,
};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

/// What the user asked the crack command to do
#[derive(Debug, Clone)]
pub struct CrackOptions {
    pub digest: String,
    pub algorithm: HashAlgorithm,
    pub mode: SearchMode,
    pub wordlist: Option<PathBuf>,
    pub show_progress: bool,
}

/// Orchestrator for the crack command
#[derive(Debug)]
pub struct CrackOrchestrator {
    brute_force: BruteForceConfig,
    progress_interval: u64,
}

impl CrackOrchestrator {
    /// Build an orchestrator from the loaded configuration
    pub fn new(config: &AppConfig) -> CliResult<Self> {
        let brute_force = config
            .search
            .brute_force_config()
            .map_err(|e| CliError::misuse(&format!("{e:#}")))?;

        debug!(
            "Crack orchestrator using {} symbols up to length {}",
            brute_force.alphabet().len(),
            brute_force.max_length()
        );
        Ok(Self {
            brute_force,
            progress_interval: config.search.progress_interval,
        })
    }

    /// Turn command line input into a validated search request
    pub fn build_request(&self, options: &CrackOptions) -> CliResult<SearchRequest> {
        let target = TargetDigest::parse(&options.digest, options.algorithm)
            .map_err(hashdemo_core::Error::from)?;

        let request = match options.mode {
            SearchMode::BruteForce => SearchRequest::brute_force(target, options.algorithm),
            SearchMode::Dictionary => {
                let Some(wordlist) = &options.wordlist else {
                    return Err(CliError::misuse("Dictionary mode needs a word list")
                        .with_context("mode", "dictionary")
                        .with_suggestion("Pass one with --wordlist <PATH>"));
                };
                SearchRequest::dictionary(target, options.algorithm, wordlist)
            }
        };

        request.validate().map_err(hashdemo_core::Error::from)?;
        Ok(request)
    }

    /// Run one search to completion
    pub async fn crack(&self, options: &CrackOptions) -> CliResult<SearchResult> {
        let request = self.build_request(options)?;

        let (provider, progress_rx) = if options.show_progress {
            let (provider, rx) = create_progress_infrastructure();
            (provider, Some(rx))
        } else {
            (Arc::new(LogProvider) as Arc<dyn ProgressProvider>, None)
        };
        let progress_handle = progress_rx.map(|rx| tokio::spawn(render_progress(rx)));

        let orchestrator = DemoOrchestrator::new()
            .with_brute_force_config(self.brute_force.clone())
            .with_progress(Arc::clone(&provider))
            .with_progress_interval(self.progress_interval);
        let session = SearchSession::new(orchestrator);

        debug!(
            "Starting {} search for {} digest {}",
            request.mode, request.algorithm, request.target_digest
        );
        let handle = session.start(request)?;

        let cancellation = handle.cancellation_token();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("{}", "Interrupted, stopping search...".yellow());
                cancellation.cancel();
            }
        });

        let result = handle.wait().await;
        interrupt.abort();

        // Close the channel so the renderer exits before the result prints
        provider.complete();
        if let Some(handle) = progress_handle {
            let _ = handle.await;
        }

        Ok(result?)
    }
}
