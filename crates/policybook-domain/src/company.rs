//! Company module - the issuer of a policy

use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Name of the company that issued a policy
///
/// Surrounding whitespace is trimmed. The name must start with an
/// alphanumeric character and may otherwise contain alphanumerics, spaces
/// and `& . - '`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Company(String);

impl Company {
    /// Message shown when a company name fails validation
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Company names should only contain alphanumeric characters, spaces and & . - ', and should not be blank";

    /// Create a new company name
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidFormat`] if the name is blank or contains
    /// disallowed characters
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let name = text.trim();
        let mut chars = name.chars();

        let valid = match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                chars.all(|c| c.is_alphanumeric() || c == ' ' || "&.-'".contains(c))
            }
            _ => false,
        };

        if !valid {
            return Err(DomainError::invalid_format(Self::MESSAGE_CONSTRAINTS));
        }

        Ok(Self(name.to_string()))
    }

    /// Get the company name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated words of the name, for keyword matching
    pub fn keywords(&self) -> Vec<String> {
        self.0.split_whitespace().map(str::to_string).collect()
    }
}

impl FromStr for Company {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
