//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic argument/input failures. Business-rule
/// outcomes (not-found, conflict) are reported through the outcome envelope,
/// never as errors; infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a sentinel where a real value is required).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (blank, too short, parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value fell outside its enumerated mapping (no prefix exists for it).
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}
