//! Validation related error types

use thiserror::Error;

/// Input validation and configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Target digest is not usable
    #[error("Invalid digest '{digest}': {reason}")]
    InvalidDigest { digest: String, reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl ValidationError {
    /// Create an invalid digest error
    pub fn invalid_digest(digest: &str, reason: &str) -> Self {
        Self::InvalidDigest {
            digest: digest.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}
