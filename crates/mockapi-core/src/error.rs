//! Error types for mockapi-core

use thiserror::Error;

/// Result type alias for mockapi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the mock API server
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP method the mock does not implement
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Invalid listen address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Hyper error
    #[error("HTTP error: {0}")]
    Hyper(#[from] hyper::Error),
}
