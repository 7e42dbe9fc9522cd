//! Custom error types for the common library
//!
//! This module defines the store error type and the error body shape that
//! every service returns to its callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Custom error type for entity store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No row with the given id exists in the store
    #[error("{entity} not found")]
    NotFound {
        /// Display name of the entity type (e.g. "Department")
        entity: &'static str,
        /// The id that was looked up
        id: i64,
    },
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Error body returned by every endpoint on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Detailed error message explaining the issue
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
