//! Policybook Storage Layer
//!
//! Implements the PersonStore trait over an in-memory record list.
//!
//! # Architecture
//!
//! - Records live in a `Vec<Person>` behind an `RwLock`
//! - Bulk removal takes the write lock once, so readers see either every
//!   matching record or none of them
//! - Nothing is written to disk
//!
//! # Examples
//!
//! ```
//! use policybook_domain::{Person, PersonStore};
//! use policybook_store::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.add_person(Person::new("Alex Yeoh", None).unwrap()).unwrap();
//! assert_eq!(store.len().unwrap(), 1);
//! ```

#![warn(missing_docs)]

use policybook_domain::{Person, PersonId, PersonPredicate, PersonStore};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A person with the same ID is already stored
    #[error("Person already exists: {0}")]
    DuplicatePerson(PersonId),

    /// A writer panicked while holding the lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// In-memory implementation of PersonStore
///
/// # Thread Safety
///
/// The store is `Sync`; wrap it in an `Arc` to share it between threads.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    people: RwLock<Vec<Person>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with people
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicatePerson`] if two people share an ID
    pub fn with_people<I>(people: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Person>,
    {
        let store = Self::new();
        for person in people {
            store.add_person(person)?;
        }
        Ok(store)
    }

    /// Number of stored people
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// Whether the store holds no people
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Person>>, StoreError> {
        self.people.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Person>>, StoreError> {
        self.people.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl PersonStore for InMemoryStore {
    type Error = StoreError;

    fn add_person(&self, person: Person) -> Result<PersonId, Self::Error> {
        let mut people = self.write()?;

        let id = person.id();
        if people.iter().any(|p| p.id() == id) {
            return Err(StoreError::DuplicatePerson(id));
        }

        debug!(id = %id, name = %person.name(), "Adding person");
        people.push(person);
        Ok(id)
    }

    fn get_person(&self, id: PersonId) -> Result<Option<Person>, Self::Error> {
        Ok(self.read()?.iter().find(|p| p.id() == id).cloned())
    }

    fn people(&self) -> Result<Vec<Person>, Self::Error> {
        Ok(self.read()?.clone())
    }

    fn filter_people(&self, predicate: &dyn PersonPredicate) -> Result<Vec<Person>, Self::Error> {
        Ok(self
            .read()?
            .iter()
            .filter(|p| predicate.test(p))
            .cloned()
            .collect())
    }

    fn batch_delete_with_predicate(
        &self,
        predicate: &dyn PersonPredicate,
    ) -> Result<usize, Self::Error> {
        let mut people = self.write()?;
        let before = people.len();

        people.retain(|p| !predicate.test(p));

        let removed = before - people.len();
        info!(removed, remaining = people.len(), "Batch delete applied");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_rejected() {
        let store = InMemoryStore::new();
        let person = Person::new("Alex Yeoh", None).unwrap();

        assert!(store.add_person(person.clone()).is_ok());
        assert!(matches!(
            store.add_person(person),
            Err(StoreError::DuplicatePerson(_))
        ));
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryStore::new();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.batch_delete_with_predicate(&|_: &Person| true).unwrap(), 0);
    }
}
