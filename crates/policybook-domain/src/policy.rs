//! Policy module - the insurance contract attached to a person

use crate::{Company, PolicyDate, PolicyNumber};
use std::cmp::Ordering;

/// How a policy is rendered by [`Policy::to_display`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// One labelled field per line, for a person's detail card
    Card,
    /// Comma-separated fields on one line, for command feedback
    Inline,
}

/// An insurance policy held by exactly one person
///
/// Every field is always present. A person without a policy has
/// `None` in place of a `Policy`; there is no "empty" policy value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Policy {
    company: Company,
    policy_number: PolicyNumber,
    issue_date: PolicyDate,
    expiry_date: PolicyDate,
}

impl Policy {
    /// Text shown in place of a policy for a person who has none
    pub const NO_POLICY_DISPLAY: &'static str = "No Policy Found";

    /// Create a new policy
    ///
    /// An issue date after the expiry date is accepted; see
    /// [`Policy::compare_dates`].
    pub fn new(
        company: Company,
        policy_number: PolicyNumber,
        issue_date: PolicyDate,
        expiry_date: PolicyDate,
    ) -> Self {
        Self {
            company,
            policy_number,
            issue_date,
            expiry_date,
        }
    }

    /// Issuing company
    pub fn company(&self) -> &Company {
        &self.company
    }

    /// Policy number
    pub fn policy_number(&self) -> &PolicyNumber {
        &self.policy_number
    }

    /// Date the policy was issued
    pub fn issue_date(&self) -> PolicyDate {
        self.issue_date
    }

    /// Date the policy expires
    pub fn expiry_date(&self) -> PolicyDate {
        self.expiry_date
    }

    /// Chronological order of the expiry date relative to the issue date
    ///
    /// `Greater` when the policy expires after it was issued. Informational
    /// only; nothing rejects a policy returning `Less`.
    pub fn compare_dates(&self) -> Ordering {
        self.expiry_date.cmp(&self.issue_date)
    }

    /// Render the policy for display
    pub fn to_display(&self, style: DisplayStyle) -> String {
        match style {
            DisplayStyle::Card => format!(
                "Company: {}\nPolicy Number: {}\nPolicy Issue Date: {}\nPolicy Expiry Date: {}",
                self.company, self.policy_number, self.issue_date, self.expiry_date
            ),
            DisplayStyle::Inline => format!(
                "{}, {}, {}, {}",
                self.company, self.policy_number, self.issue_date, self.expiry_date
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(issue: &str, expiry: &str) -> Policy {
        Policy::new(
            Company::parse("Allianz").unwrap(),
            PolicyNumber::parse("AZ-001").unwrap(),
            PolicyDate::parse(issue).unwrap(),
            PolicyDate::parse(expiry).unwrap(),
        )
    }

    #[test]
    fn test_compare_dates() {
        assert_eq!(policy("01-01-2022", "01-01-2023").compare_dates(), Ordering::Greater);
        assert_eq!(policy("01-01-2022", "01-01-2022").compare_dates(), Ordering::Equal);
        // Accepted even though the dates are inverted
        assert_eq!(policy("01-01-2023", "01-01-2022").compare_dates(), Ordering::Less);
    }

    #[test]
    fn test_card_display() {
        let text = policy("01-01-2022", "15-11-2022").to_display(DisplayStyle::Card);
        assert_eq!(
            text,
            "Company: Allianz\nPolicy Number: AZ-001\nPolicy Issue Date: 01-01-2022\nPolicy Expiry Date: 15-11-2022"
        );
    }

    #[test]
    fn test_inline_display() {
        let text = policy("01-01-2022", "15-11-2022").to_display(DisplayStyle::Inline);
        assert_eq!(text, "Allianz, AZ-001, 01-01-2022, 15-11-2022");
    }

    #[test]
    fn test_equality() {
        assert_eq!(policy("01-01-2022", "15-11-2022"), policy("01-01-2022", "15-11-2022"));
        assert_ne!(policy("01-01-2022", "15-11-2022"), policy("01-01-2022", "16-11-2022"));
    }
}
