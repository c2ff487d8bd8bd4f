//! Candidate test loop shared by every search strategy

use super::{Outcome, SearchContext, SearchMode, SearchResult};
use crate::error::HashError;
use crate::hashing::{HashAlgorithm, PasswordHashAlgorithm, TargetDigest};
use crate::progress::ProgressUpdate;
use log::{debug, warn};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Instant;

/// Hashes candidates and compares them to the target
///
/// A candidate whose digest cannot be computed is counted and skipped; the
/// first such failure in a search is logged once.
pub(crate) struct Scanner<'a> {
    target: &'a TargetDigest,
    algorithm: HashAlgorithm,
    mode: SearchMode,
    context: &'a SearchContext,
    hasher: Result<Arc<dyn PasswordHashAlgorithm>, HashError>,
    total: Option<u64>,
    started: Instant,
    candidates_tried: u64,
    hash_failures: u64,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(
        target: &'a TargetDigest,
        algorithm: HashAlgorithm,
        mode: SearchMode,
        context: &'a SearchContext,
        total: Option<u64>,
    ) -> Self {
        debug!("Starting {mode} search for {algorithm} digest {target}");
        Self {
            target,
            algorithm,
            mode,
            context,
            hasher: context.registry.resolve(algorithm),
            total,
            started: Instant::now(),
            candidates_tried: 0,
            hash_failures: 0,
        }
    }

    /// Test one candidate
    ///
    /// Breaks with the terminal outcome on a match or when cancelled.
    pub(crate) fn offer(
        &mut self,
        candidate: &str,
        current_length: Option<usize>,
    ) -> ControlFlow<Outcome> {
        if self.context.cancellation.is_cancelled() {
            debug!(
                "{} search cancelled after {} candidates",
                self.mode, self.candidates_tried
            );
            return ControlFlow::Break(Outcome::Cancelled);
        }

        self.candidates_tried += 1;
        self.report_progress(current_length);

        match &self.hasher {
            Ok(hasher) => {
                if self.target.matches(&hasher.digest(candidate)) {
                    debug!(
                        "Match found after {} candidates",
                        self.candidates_tried
                    );
                    return ControlFlow::Break(Outcome::Found(candidate.to_string()));
                }
            }
            Err(error) => {
                if self.hash_failures == 0 {
                    warn!("{error}; candidates will be skipped");
                }
                self.hash_failures += 1;
            }
        }

        ControlFlow::Continue(())
    }

    fn report_progress(&self, current_length: Option<usize>) {
        let interval = self.context.progress_interval;
        if interval > 0 && self.candidates_tried.is_multiple_of(interval) {
            self.context.progress.report(ProgressUpdate::Search {
                mode: self.mode,
                candidates_tried: self.candidates_tried,
                total: self.total,
                current_length,
            });
        }
    }

    /// Close the search with its terminal outcome
    pub(crate) fn finish(self, outcome: Outcome) -> SearchResult {
        let elapsed = self.started.elapsed();
        debug!(
            "{} search finished: {outcome} ({} candidates, {} hash failures, {:.2}s)",
            self.mode,
            self.candidates_tried,
            self.hash_failures,
            elapsed.as_secs_f64()
        );
        SearchResult {
            outcome,
            elapsed,
            algorithm: self.algorithm,
            mode: self.mode,
            candidates_tried: self.candidates_tried,
            hash_failures: self.hash_failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::AlgorithmRegistry;
    use crate::progress::ProgressProvider;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        updates: Mutex<Vec<ProgressUpdate>>,
    }

    impl ProgressProvider for RecordingProvider {
        fn report(&self, update: ProgressUpdate) {
            self.updates.lock().unwrap().push(update);
        }

        fn complete(&self) {}
    }

    fn md5_target(password: &str) -> TargetDigest {
        TargetDigest::new(&crate::hashing::hash(password, HashAlgorithm::MD5).unwrap())
    }

    #[test]
    fn test_match_breaks_with_found() {
        let target = md5_target("abc");
        let context = SearchContext::default();
        let mut scanner = Scanner::new(
            &target,
            HashAlgorithm::MD5,
            SearchMode::Dictionary,
            &context,
            None,
        );

        assert_eq!(scanner.offer("abd", None), ControlFlow::Continue(()));
        assert_eq!(
            scanner.offer("abc", None),
            ControlFlow::Break(Outcome::Found("abc".to_string()))
        );

        let result = scanner.finish(Outcome::Found("abc".to_string()));
        assert_eq!(result.candidates_tried, 2);
        assert_eq!(result.hash_failures, 0);
    }

    #[test]
    fn test_unavailable_algorithm_skips_candidates() {
        let target = md5_target("abc");
        let context = SearchContext::default().with_registry(Arc::new(AlgorithmRegistry::new()));
        let mut scanner = Scanner::new(
            &target,
            HashAlgorithm::MD5,
            SearchMode::Dictionary,
            &context,
            None,
        );

        for candidate in ["abc", "abd", "abe"] {
            assert_eq!(scanner.offer(candidate, None), ControlFlow::Continue(()));
        }

        let result = scanner.finish(Outcome::NotFound);
        assert_eq!(result.candidates_tried, 3);
        assert_eq!(result.hash_failures, 3);
    }

    #[test]
    fn test_cancelled_before_candidate() {
        let target = md5_target("abc");
        let context = SearchContext::default();
        context.cancellation.cancel();
        let mut scanner = Scanner::new(
            &target,
            HashAlgorithm::MD5,
            SearchMode::BruteForce,
            &context,
            Some(10),
        );

        assert_eq!(
            scanner.offer("abc", Some(3)),
            ControlFlow::Break(Outcome::Cancelled)
        );
        assert_eq!(scanner.finish(Outcome::Cancelled).candidates_tried, 0);
    }

    #[test]
    fn test_progress_reported_every_interval() {
        let target = md5_target("zzz");
        let provider = Arc::new(RecordingProvider::default());
        let context = SearchContext::default()
            .with_progress(provider.clone())
            .with_progress_interval(2);
        let mut scanner = Scanner::new(
            &target,
            HashAlgorithm::MD5,
            SearchMode::BruteForce,
            &context,
            Some(5),
        );

        for candidate in ["a", "b", "c", "d", "e"] {
            let _ = scanner.offer(candidate, Some(1));
        }

        let updates = provider.updates.lock().unwrap();
        let tried: Vec<u64> = updates
            .iter()
            .filter_map(|update| match update {
                ProgressUpdate::Search {
                    candidates_tried, ..
                } => Some(*candidates_tried),
                _ => None,
            })
            .collect();
        assert_eq!(tried, vec![2, 4]);
    }
}
