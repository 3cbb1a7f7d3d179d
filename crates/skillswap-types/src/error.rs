//! Error types shared across the SkillSwap crates

use crate::ListingId;
use thiserror::Error;

/// SkillSwap errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkillswapError {
    /// Newsletter address empty or missing `@`
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    /// A control referenced an id absent from the store
    #[error("Listing {0} not found")]
    ListingNotFound(ListingId),

    /// Category name outside the known set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Seed data violates store invariants
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Terminal command that could not be parsed
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SkillswapError>;
