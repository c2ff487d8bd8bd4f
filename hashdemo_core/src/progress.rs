//! Progress reporting abstractions
//!
//! Searchers report through the [`ProgressProvider`] trait so the core
//! library never depends on a particular channel or terminal renderer.

use crate::search::SearchMode;

/// Core trait for progress reporting
pub trait ProgressProvider: Send + Sync {
    /// Report a progress update
    fn report(&self, update: ProgressUpdate);

    /// Signal that no further updates will follow
    fn complete(&self);
}

/// Unified progress update type
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressUpdate {
    /// Candidate enumeration progress
    Search {
        mode: SearchMode,
        candidates_tried: u64,
        /// Size of the search space, when it is known up front
        total: Option<u64>,
        /// Candidate length currently being enumerated (brute force only)
        current_length: Option<usize>,
    },

    /// Generic status message
    Status { message: String },
}

impl ProgressUpdate {
    /// Completed fraction in `0.0..=1.0`, when the total is known
    pub fn fraction(&self) -> Option<f64> {
        match self {
            ProgressUpdate::Search {
                candidates_tried,
                total: Some(total),
                ..
            } if *total > 0 => Some((*candidates_tried as f64 / *total as f64).min(1.0)),
            _ => None,
        }
    }
}

/// Null implementation for when no progress is needed
pub struct NullProvider;

impl ProgressProvider for NullProvider {
    fn report(&self, _update: ProgressUpdate) {}

    fn complete(&self) {}
}

/// Provider that forwards updates to the `log` facade at trace level
pub struct LogProvider;

impl ProgressProvider for LogProvider {
    fn report(&self, update: ProgressUpdate) {
        let fraction = update.fraction();
        match update {
            ProgressUpdate::Search {
                mode,
                candidates_tried,
                current_length,
                ..
            } => match fraction {
                Some(fraction) => log::trace!(
                    "{mode} progress: {candidates_tried} tried ({:.1}%, length: {current_length:?})",
                    fraction * 100.0
                ),
                None => log::trace!("{mode} progress: {candidates_tried} tried"),
            },
            ProgressUpdate::Status { message } => log::trace!("{message}"),
        }
    }

    fn complete(&self) {
        log::trace!("Progress reporting complete");
    }
}
