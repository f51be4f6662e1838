//! # AppError
//!
//! Centralized error handling for the Postify ecosystem.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all postify-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., Post)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Soft rejection: a write failed validation and nothing was persisted.
    /// Absorbed at the boundary as "no state change", never a user-visible error.
    #[error("rejected: {0}")]
    Rejected(String),

    /// Infrastructure failure (e.g., DB down, template render failure)
    #[error("internal service error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(kind: &str, id: impl ToString) -> Self {
        AppError::NotFound(kind.to_string(), id.to_string())
    }
}

/// A specialized Result type for Postify logic.
pub type Result<T> = std::result::Result<T, AppError>;
