//! Error types for the confdir ecosystem.

use thiserror::Error;

/// Errors that can occur in confdir operations.
///
/// Source *data* never produces an error: malformed or missing programme
/// files degrade to empty collections in the loaders. These variants cover
/// the genuinely fallible edges (configuration and the data directory).
#[derive(Error, Debug)]
pub enum ConfdirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data directory not found: {0}")]
    DataDirNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for confdir operations.
pub type ConfdirResult<T> = Result<T, ConfdirError>;
