//! Policy date module - issue and expiry dates of a policy

use crate::DomainError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Calendar date of a policy's issue or expiry, written `dd-MM-yyyy`
///
/// Validation and construction share one strict parser: the text must be
/// exactly two day digits, two month digits and four year digits separated
/// by dashes, and must name a real calendar day. Out-of-range values such as
/// `32-01-2022` or `31-02-2022` are rejected rather than rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyDate(NaiveDate);

impl PolicyDate {
    /// Message shown when a policy date fails validation
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Policy issue / expiry date should be in the format dd-mm-yyyy";

    /// Placeholder date older records used to mean "no policy date set"
    ///
    /// Absence is modelled as `Option<Policy>` on [`crate::Person`]; this
    /// value is only recognised when importing such records.
    pub const LEGACY_SENTINEL: &'static str = "01-01-1000";

    const FORMAT: &'static str = "%d-%m-%Y";

    /// Parse a policy date from `dd-MM-yyyy` text
    ///
    /// # Examples
    ///
    /// ```
    /// use policybook_domain::PolicyDate;
    ///
    /// let date = PolicyDate::parse("15-11-2022").unwrap();
    /// assert_eq!(date.to_string(), "15-11-2022");
    /// assert!(PolicyDate::parse("31-02-2022").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if !has_date_shape(text) {
            return Err(Self::format_error());
        }
        NaiveDate::parse_from_str(text, Self::FORMAT)
            .map(Self)
            .map_err(|_| Self::format_error())
    }

    /// Returns true if `text` is a valid `dd-MM-yyyy` calendar date
    pub fn validate(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Day of month (1-31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Month of year (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Whether this is the legacy "no date" placeholder
    pub fn is_legacy_sentinel(&self) -> bool {
        self.to_string() == Self::LEGACY_SENTINEL
    }

    fn format_error() -> DomainError {
        DomainError::invalid_format(Self::MESSAGE_CONSTRAINTS)
    }
}

/// `dd-MM-yyyy`: digits everywhere except dashes at offsets 2 and 5
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for PolicyDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PolicyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
