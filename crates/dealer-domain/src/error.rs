//! Dealership domain error types.

use thiserror::Error;

/// Errors that can occur in dealership domain operations.
#[derive(Error, Debug)]
pub enum DealerError {
    /// Option not found in its catalog.
    #[error("Option not found in {category} catalog: {id}")]
    OptionNotFound { category: String, id: String },

    /// Trim not found.
    #[error("Trim not found: {0}")]
    TrimNotFound(String),

    /// A singular category has no options to default to.
    #[error("Catalog category is empty: {0}")]
    EmptyCategory(String),

    /// Deal not found on the board.
    #[error("Deal not found: {0}")]
    DealNotFound(String),

    /// Invalid pipeline stage transition.
    #[error("Invalid stage transition from {from} to {to}")]
    InvalidStageTransition { from: String, to: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,
}
