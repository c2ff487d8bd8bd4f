//! Progress provider implementation for CLI
//!
//! Sends updates through a channel to a separate rendering task, so the
//! search worker never blocks on terminal output.

use hashdemo_core::{ProgressProvider, ProgressUpdate};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Capacity of the update channel; updates beyond it are dropped
const CHANNEL_CAPACITY: usize = 100;

/// Channel-based progress provider for CLI rendering
pub struct ChannelProvider {
    tx: Mutex<Option<mpsc::Sender<ProgressUpdate>>>,
}

impl ChannelProvider {
    pub fn new(tx: mpsc::Sender<ProgressUpdate>) -> Self {
        Self {
            tx: Mutex::new(Some(tx)),
        }
    }

    fn sender(&self) -> Option<mpsc::Sender<ProgressUpdate>> {
        self.tx.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ProgressProvider for ChannelProvider {
    fn report(&self, update: ProgressUpdate) {
        // Called from the blocking worker; never wait on a slow renderer
        if let Some(tx) = self.sender() {
            let _ = tx.try_send(update);
        }
    }

    fn complete(&self) {
        // Drop our sender so the renderer can exit its loop
        if let Ok(mut guard) = self.tx.lock() {
            *guard = None;
        }
    }
}

/// Create a progress provider and the receiver its renderer reads from
pub fn create_progress_infrastructure()
-> (Arc<dyn ProgressProvider>, mpsc::Receiver<ProgressUpdate>) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let provider = Arc::new(ChannelProvider::new(tx)) as Arc<dyn ProgressProvider>;
    (provider, rx)
}
