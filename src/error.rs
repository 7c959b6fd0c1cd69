// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Storage failures are never fatal: the stores catch these at the
//! persistence boundary, log them, and keep the in-memory collections
//! authoritative for the session.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for storage and service boundaries.
pub type Result<T> = std::result::Result<T, AppError>;
