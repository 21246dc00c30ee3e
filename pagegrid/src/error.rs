//! Error types for fetch coordination.

use thiserror::Error;

/// Error type for fetch-callback failures.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FetchError {
    /// Error message
    pub message: String,
}

impl FetchError {
    /// Create a new fetch error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for FetchError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for FetchError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Errors the coordinator reports through the error channel.
///
/// All variants are non-fatal: the view keeps its last-good data and only
/// the loading flag is cleared.
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// No fetcher was configured; the fetch attempt was abandoned early.
    #[error("no data fetcher configured")]
    MissingFetcher,

    /// The fetcher returned an error.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
