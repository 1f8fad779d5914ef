//! Domain error types

use thiserror::Error;

/// Errors raised while constructing domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input text failed the declared pattern or range check of a value object
    #[error("{constraint}")]
    InvalidFormat {
        /// User-facing description of the accepted format
        constraint: &'static str,
    },

    /// Person name was blank
    #[error("Names should not be blank")]
    InvalidName,
}

impl DomainError {
    pub(crate) fn invalid_format(constraint: &'static str) -> Self {
        Self::InvalidFormat { constraint }
    }

    /// Whether this error came from a value-object format check
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
