//! Error types for the document server

use thiserror::Error;

/// Result type for store and API operations
pub type DocResult<T> = Result<T, DocError>;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("Document not found: {0}")]
    NotFound(u64),

    #[error("Invalid document ID: {0}")]
    InvalidId(String),

    #[error("Invalid document data: {0}")]
    Validation(String),

    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
