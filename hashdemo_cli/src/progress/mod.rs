//! Progress reporting module for the CLI
//!
//! Bridges the core library's progress updates to an `indicatif` display
//! running on its own task.

pub mod provider;
pub mod renderer;
pub mod utils;

pub use provider::{ChannelProvider, create_progress_infrastructure};
pub use renderer::render_progress;
pub use utils::{format_count, format_rate};
