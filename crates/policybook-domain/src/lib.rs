//! Policybook Domain Layer
//!
//! This crate contains the core domain model for Policybook, a client-record
//! tool for insurance agents. It performs no I/O and defines the value
//! objects, record types, predicates and trait interfaces that the store and
//! CLI layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Person**: a client record, optionally holding a policy
//! - **Policy**: company, policy number, issue date and expiry date
//! - **PolicyDate**: a strictly validated `dd-MM-yyyy` calendar date
//! - **DeleteMonth**: an `MM-yyyy` selector matched against expiry dates
//! - **Predicates**: pure tests over a person used to query and batch-delete
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Storage implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod company;
pub mod delete_month;
pub mod error;
pub mod person;
pub mod policy;
pub mod policy_date;
pub mod policy_number;
pub mod predicate;
pub mod traits;

// Re-exports for convenience
pub use company::Company;
pub use delete_month::DeleteMonth;
pub use error::DomainError;
pub use person::{Person, PersonId};
pub use policy::{DisplayStyle, Policy};
pub use policy_date::PolicyDate;
pub use policy_number::PolicyNumber;
pub use predicate::{CompanyContainsKeywords, PersonPredicate, PolicyExpiryInMonth};
pub use traits::PersonStore;
