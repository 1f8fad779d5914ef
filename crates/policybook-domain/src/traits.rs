//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Person, PersonId, PersonPredicate};

/// Trait for storing, querying and bulk-removing people
///
/// Implemented by the infrastructure layer (policybook-store). Methods take
/// `&self`; implementations synchronise internally so a store can be shared
/// between readers while a bulk removal runs.
pub trait PersonStore {
    /// Error type for store operations
    type Error;

    /// Add a person to the store
    fn add_person(&self, person: Person) -> Result<PersonId, Self::Error>;

    /// Get a person by ID
    fn get_person(&self, id: PersonId) -> Result<Option<Person>, Self::Error>;

    /// All people, in insertion order
    fn people(&self) -> Result<Vec<Person>, Self::Error>;

    /// People satisfying the predicate, in insertion order
    fn filter_people(&self, predicate: &dyn PersonPredicate) -> Result<Vec<Person>, Self::Error>;

    /// Remove every person satisfying the predicate
    ///
    /// The removal is all-or-nothing: no reader may observe a state where
    /// only some of the matching people are gone. Returns the number removed.
    fn batch_delete_with_predicate(
        &self,
        predicate: &dyn PersonPredicate,
    ) -> Result<usize, Self::Error>;
}
