mod formatters;

pub use formatters::{JsonFormatter, TextFormatter};

use anyhow::Result;
use hashdemo_core::{HashAlgorithm, SearchResult};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the outcome of a crack attempt
    fn format_result(&self, result: &SearchResult) -> Result<String>;

    /// Format the digests of one plaintext
    fn format_digests(&self, plaintext: &str, digests: &[(HashAlgorithm, String)])
    -> Result<String>;
}

/// Create a formatter based on output format
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
