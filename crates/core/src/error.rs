//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic value failures. Transport and upstream
/// concerns belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A price could not be parsed (negative, not a decimal, too many
    /// fractional digits).
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A well-formed decimal too large to represent.
    #[error("price out of range: {0}")]
    PriceOutOfRange(String),
}

impl DomainError {
    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::PriceOutOfRange(msg.into())
    }
}
