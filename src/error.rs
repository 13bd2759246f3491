//! Error types for pagekit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Boxed error produced by a data source
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("The number {page_number} is outside the available page range.")]
    OutOfRange {
        page_number: usize,
        page_count: usize,
    },

    #[error("Operation was cancelled")]
    Cancelled,

    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("Source failure: {0}")]
    Source(#[source] BoxError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an out-of-range error for a page request
    pub fn out_of_range(page_number: usize, page_count: usize) -> Self {
        Self::OutOfRange {
            page_number,
            page_count,
        }
    }

    /// Wrap a failure raised by a data source
    pub fn source_failure(err: impl Into<BoxError>) -> Self {
        Self::Source(err.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Check if this error is an out-of-range page request
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;
