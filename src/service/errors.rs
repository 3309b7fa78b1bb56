//! # Service Errors
//!
//! Error types for the business services sitting on top of the stores.

use thiserror::Error;

use crate::storage::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No record matches the request
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with a matching unique attribute already exists
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Caller-supplied value rejected before touching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Password does not meet the policy
    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    /// Password hashing failed
    #[error("Password hashing failed")]
    HashingFailed,
}

impl ServiceError {
    /// Stable error code for CLI output
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Store(e) => e.code().code(),
            ServiceError::NotFound(_) => "SHOP_NOT_FOUND",
            ServiceError::DuplicateEntry(_) => "SHOP_DUPLICATE_ENTRY",
            ServiceError::InvalidInput(_) => "SHOP_INVALID_INPUT",
            ServiceError::WeakPassword(_) => "SHOP_WEAK_PASSWORD",
            ServiceError::HashingFailed => "SHOP_HASHING_FAILED",
        }
    }
}
