//! Hindsight error types

use thiserror::Error;

/// Hindsight error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Corpus loading error
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Insight memory error
    #[error("Memory error: {0}")]
    Memory(String),

    /// Report rendering error
    #[error("Report error: {0}")]
    Report(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Hindsight operations
pub type Result<T> = std::result::Result<T, Error>;
