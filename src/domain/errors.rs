//! # Domain Errors
//!
//! Typed failures for the business operations. Validation and lookup errors
//! carry messages meant to be shown to the person at the counter as-is;
//! storage failures wrap whatever the table backend reported.

use thiserror::Error;

/// Result alias used by every domain service operation.
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected by a business rule before anything was written.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A lookup by id matched nothing.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    /// An order line asks for more units than the inventory holds.
    #[error("insufficient stock for {product}: {available} available, {requested} requested")]
    InsufficientStock {
        product: String,
        available: u32,
        requested: u32,
    },

    /// The underlying table store failed.
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    /// Validation failure with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    /// Lookup failure for the named entity.
    pub fn not_found(entity: &'static str, id: u32) -> Self {
        DomainError::NotFound { entity, id }
    }
}
