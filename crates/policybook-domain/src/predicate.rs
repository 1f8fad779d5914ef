//! Person predicates used to query and batch-delete by policy attributes
//!
//! Every predicate is a pure test over a [`Person`]. People without a policy
//! never match a policy-based predicate.

use crate::{DeleteMonth, Person};

/// A pure boolean test over a person
pub trait PersonPredicate: Send + Sync {
    /// Returns true if the person satisfies the predicate
    fn test(&self, person: &Person) -> bool;
}

impl<F> PersonPredicate for F
where
    F: Fn(&Person) -> bool + Send + Sync,
{
    fn test(&self, person: &Person) -> bool {
        self(person)
    }
}

/// Matches people whose policy expires within a given month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyExpiryInMonth {
    month: DeleteMonth,
}

impl PolicyExpiryInMonth {
    /// Create the predicate for a delete month
    pub fn new(month: DeleteMonth) -> Self {
        Self { month }
    }
}

impl PersonPredicate for PolicyExpiryInMonth {
    fn test(&self, person: &Person) -> bool {
        person
            .policy()
            .is_some_and(|policy| self.month.matches(&policy.expiry_date()))
    }
}

/// Matches people whose policy company contains any of the keywords
///
/// The company name is split on whitespace and each keyword is compared
/// against whole words, ignoring case: `"allianz"` matches
/// `"Allianz Group"` but `"Alli"` does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyContainsKeywords {
    keywords: Vec<String>,
}

impl CompanyContainsKeywords {
    /// Create the predicate from an explicit keyword list
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Create the predicate from free text, one keyword per word
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace().map(str::to_string).collect())
    }
}

impl PersonPredicate for CompanyContainsKeywords {
    fn test(&self, person: &Person) -> bool {
        let Some(policy) = person.policy() else {
            return false;
        };
        let company = policy.company().as_str().to_lowercase();
        let words: Vec<&str> = company.split_whitespace().collect();

        self.keywords
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .any(|keyword| words.contains(&keyword.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Company, Policy, PolicyDate, PolicyNumber};

    fn person_with(company: &str, expiry: &str) -> Person {
        let policy = Policy::new(
            Company::parse(company).unwrap(),
            PolicyNumber::parse("P-1").unwrap(),
            PolicyDate::parse("01-01-2020").unwrap(),
            PolicyDate::parse(expiry).unwrap(),
        );
        Person::new("Test Person", Some(policy)).unwrap()
    }

    fn month(s: &str) -> PolicyExpiryInMonth {
        PolicyExpiryInMonth::new(DeleteMonth::parse(s).unwrap())
    }

    #[test]
    fn test_expiry_in_month() {
        let person = person_with("Allianz", "15-11-2022");
        assert!(month("11-2022").test(&person));
        assert!(!month("12-2022").test(&person));
        assert!(!month("11-2021").test(&person));
    }

    #[test]
    fn test_expiry_ignores_people_without_policy() {
        let person = Person::new("No Policy", None).unwrap();
        assert!(!month("11-2022").test(&person));
        assert!(!month("01-1000").test(&person));
    }

    #[test]
    fn test_company_keyword_match() {
        let person = person_with("Allianz Group", "15-11-2022");
        assert!(CompanyContainsKeywords::from_text("Allianz").test(&person));
        assert!(CompanyContainsKeywords::from_text("group").test(&person));
        assert!(!CompanyContainsKeywords::from_text("Prudential").test(&person));
    }

    #[test]
    fn test_company_match_is_any_keyword() {
        let person = person_with("Prudential", "15-11-2022");
        assert!(CompanyContainsKeywords::from_text("Allianz Prudential").test(&person));
    }

    #[test]
    fn test_company_requires_whole_word() {
        let person = person_with("Allianz Group", "15-11-2022");
        assert!(!CompanyContainsKeywords::from_text("Alli").test(&person));
        assert!(!CompanyContainsKeywords::from_text("Groups").test(&person));
    }

    #[test]
    fn test_company_ignores_people_without_policy() {
        let person = Person::new("No Policy", None).unwrap();
        assert!(!CompanyContainsKeywords::from_text("Allianz").test(&person));
    }

    #[test]
    fn test_empty_keywords_never_match() {
        let person = person_with("Allianz", "15-11-2022");
        assert!(!CompanyContainsKeywords::from_text("   ").test(&person));
    }

    #[test]
    fn test_closure_predicate() {
        let person = person_with("AIA", "15-11-2022");
        let by_name = |p: &Person| p.name().starts_with("Test");
        assert!(by_name.test(&person));
    }
}
