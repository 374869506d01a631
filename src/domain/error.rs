//! Domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-level error types.
///
/// Every variant is recoverable by the caller; the catalog surfaces
/// failures immediately and never retries on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Tariff name must not be empty")]
    EmptyName,

    #[error("Base price must be greater than zero, got {0}")]
    InvalidPrice(Decimal),

    #[error("Discount percent must be between 0 and 100, got {0}")]
    InvalidDiscount(Decimal),

    #[error("Tariff already exists: {0}")]
    DuplicateName(String),

    #[error("Tariff not found: {0}")]
    NotFound(String),

    #[error("The tariff catalog is empty")]
    EmptyCatalog,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
