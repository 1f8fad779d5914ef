//! Person module - a client record in the address book

use crate::policy::DisplayStyle;
use crate::{DomainError, Policy};
use std::fmt;

/// Unique identifier for a person based on UUIDv7
///
/// UUIDv7 keeps identifiers sortable by creation time, so listing people by
/// id lists them in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(u128);

impl PersonId {
    /// Generate a new UUIDv7-based PersonId
    ///
    /// # Examples
    ///
    /// ```
    /// use policybook_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse a PersonId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A client of the agent
///
/// Fields are private so every person goes through the name check in
/// [`Person::with_id`].
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: PersonId,
    name: String,
    policy: Option<Policy>,
}

impl Person {
    /// Create a new person with a fresh identifier
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidName`] if the name is blank
    pub fn new(name: &str, policy: Option<Policy>) -> Result<Self, DomainError> {
        Self::with_id(PersonId::new(), name, policy)
    }

    /// Create a person with a known identifier
    pub fn with_id(id: PersonId, name: &str, policy: Option<Policy>) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            policy,
        })
    }

    /// Unique identifier
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Display name, trimmed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's policy, if one is set
    pub fn policy(&self) -> Option<&Policy> {
        self.policy.as_ref()
    }

    /// Render the person's policy, or the "no policy" text
    pub fn policy_display(&self, style: DisplayStyle) -> String {
        match &self.policy {
            Some(policy) => policy.to_display(style),
            None => Policy::NO_POLICY_DISPLAY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Company, PolicyDate, PolicyNumber};

    #[test]
    fn test_person_id_display_and_parse() {
        let id = PersonId::new();
        let id_str = id.to_string();
        assert_eq!(id_str.len(), 36);
        assert_eq!(PersonId::from_string(&id_str).unwrap(), id);
        assert!(PersonId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_person_ids_are_ordered() {
        let id1 = PersonId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = PersonId::new();
        assert!(id1 < id2);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Person::new("  ", None), Err(DomainError::InvalidName));
        assert_eq!(
            Person::with_id(PersonId::new(), "", None),
            Err(DomainError::InvalidName)
        );
    }

    #[test]
    fn test_accessors_expose_validated_fields() {
        let id = PersonId::new();
        let person = Person::with_id(id, "  Alex Yeoh ", None).unwrap();
        assert_eq!(person.id(), id);
        assert_eq!(person.name(), "Alex Yeoh");
        assert!(person.policy().is_none());
    }

    #[test]
    fn test_policy_display() {
        let person = Person::new("Alex Yeoh", None).unwrap();
        assert_eq!(person.policy_display(DisplayStyle::Card), "No Policy Found");

        let policy = Policy::new(
            Company::parse("AIA").unwrap(),
            PolicyNumber::parse("A1").unwrap(),
            PolicyDate::parse("01-01-2022").unwrap(),
            PolicyDate::parse("01-01-2023").unwrap(),
        );
        let person = Person::new("Alex Yeoh", Some(policy)).unwrap();
        assert_eq!(
            person.policy_display(DisplayStyle::Inline),
            "AIA, A1, 01-01-2022, 01-01-2023"
        );
    }
}
