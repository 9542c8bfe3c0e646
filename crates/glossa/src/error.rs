//! Error types for the glossa library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for glossa operations.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// API credential for a provider is missing or empty.
    #[error("{provider} API key is missing (set {env_var})")]
    CredentialMissing { provider: String, env_var: String },

    /// Remote model API call failed.
    #[error("{provider} API error: {message}")]
    Api { provider: String, message: String },

    /// Model returned output that does not match the response contract.
    #[error("Malformed model response: {0}")]
    ModelResponse(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// History store read/write failure.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// History record lookup failure.
    #[error("History error: {0}")]
    History(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GlossaError {
    /// Check whether this is the actionable missing-credential class.
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, GlossaError::CredentialMissing { .. })
    }
}

/// Result type alias for glossa operations.
pub type Result<T> = std::result::Result<T, GlossaError>;
