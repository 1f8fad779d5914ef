//! Policy number module

use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a policy as printed by its issuer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyNumber(String);

impl PolicyNumber {
    /// Message shown when a policy number fails validation
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Policy numbers should only contain alphanumeric characters and dashes, and should not be blank";

    /// Create a new policy number
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let number = text.trim();
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomainError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(number.to_string()))
    }

    /// Get policy number as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PolicyNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
