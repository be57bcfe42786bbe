//! Error types for rapid_summarizer

use thiserror::Error;

/// Errors surfaced by the summarization engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeError {
    /// Input text or transcript was empty or whitespace-only
    #[error("input is empty")]
    EmptyInput,

    /// Every sentence was rejected by the quality filter
    #[error("no summary possible: no candidate sentences survived filtering")]
    NoCandidates,

    /// A configuration value is out of range
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Input exceeds a configured runtime bound
    #[error("input too large: {actual} {unit} exceeds limit of {limit}")]
    InputTooLarge {
        limit: usize,
        actual: usize,
        unit: &'static str,
    },

    /// A request failed validation; every error message is kept
    #[error("invalid request: {}", .diagnostics.join("; "))]
    InvalidRequest { diagnostics: Vec<String> },

    /// A pluggable summarization strategy failed
    #[error("{strategy} strategy failed: {message}")]
    Strategy { strategy: String, message: String },
}

impl SummarizeError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a strategy failure
    pub fn strategy(strategy: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Strategy {
            strategy: strategy.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for summarization operations
pub type Result<T> = std::result::Result<T, SummarizeError>;
