//! Error types for the expressivity checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DlxError {
    #[error("Malformed predicate: {0}")]
    MalformedPredicate(String),

    #[error("Connectivity error: {0}")]
    Connectivity(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Failed to parse RDF: {0}")]
    Parse(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DlxError {
    /// Connectivity failures are the one class of error where retrying the
    /// whole classification can succeed. Everything else is a bug in the
    /// predicate table, the input, or this crate.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DlxError::Connectivity(_))
    }
}

pub type Result<T> = std::result::Result<T, DlxError>;
