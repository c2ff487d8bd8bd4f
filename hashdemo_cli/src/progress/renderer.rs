//! Progress rendering for the CLI
//!
//! Turns `ProgressUpdate` messages into an `indicatif` bar on stderr.

use super::utils::{format_count, format_rate};
use colored::*;
use hashdemo_core::ProgressUpdate;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% | {msg}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} [{elapsed_precise}] {msg}";

/// Render progress updates from a channel until every sender is gone
pub async fn render_progress(mut rx: mpsc::Receiver<ProgressUpdate>) {
    let mut renderer = ProgressRenderer::new();

    while let Some(update) = rx.recv().await {
        renderer.handle_update(update);
    }

    renderer.finish();
}

/// Progress renderer that manages the search progress bar
pub struct ProgressRenderer {
    bar: Option<ProgressBar>,
    start_time: Instant,
}

impl ProgressRenderer {
    pub fn new() -> Self {
        Self {
            bar: None,
            start_time: Instant::now(),
        }
    }

    /// Handle a progress update
    pub fn handle_update(&mut self, update: ProgressUpdate) {
        match update {
            ProgressUpdate::Search {
                mode,
                candidates_tried,
                total,
                current_length,
            } => {
                let bar = self.bar.get_or_insert_with(|| Self::create_bar(total));
                bar.set_position(candidates_tried);

                let rate = candidates_tried as f64 / self.start_time.elapsed().as_secs_f64().max(1e-3);
                let mut message = format!(
                    "{}: {} tried | {}",
                    mode.to_string().bold(),
                    format_count(candidates_tried),
                    format_rate(rate)
                );
                if let Some(length) = current_length {
                    message.push_str(&format!(" | length {length}"));
                }
                bar.set_message(message);
            }

            ProgressUpdate::Status { message } => self.show_status(&message),
        }
    }

    fn create_bar(total: Option<u64>) -> ProgressBar {
        match total {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template(BAR_TEMPLATE)
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("#>-"),
                );
                bar
            }
            None => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                        .template(SPINNER_TEMPLATE)
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner
            }
        }
    }

    fn show_status(&self, message: &str) {
        let line = format!("{} {}", "→".green(), message);
        match &self.bar {
            Some(bar) => bar.println(line),
            None => eprintln!("{line}"),
        }
    }

    /// Clear the bar; the final result is printed separately
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        Self::new()
    }
}
