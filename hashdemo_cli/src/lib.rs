//! hashdemo command line interface
//!
//! Library half of the `hashdemo` binary: configuration, command
//! orchestration, progress display and output formatting.

pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod progress;
pub mod terminal;
