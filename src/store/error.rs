//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No book exists under the requested id
    #[error("Book not found: {id}")]
    NotFound { id: String },

    /// The store rejected the supplied book data
    #[error("Invalid book data: {message}")]
    Validation { message: String },

    /// The backing store failed
    #[error("Store backend failure: {message}")]
    Backend { message: String },

    /// Store configuration or seed data problem
    #[error("Store configuration error: {message}")]
    Configuration { message: String },
}

impl StoreError {
    /// Create a book not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation {
            message: message.into(),
        }
    }

    /// Create a backend failure error
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        StoreError::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error is a missing-book error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
