//! Delete month module - `MM-yyyy` selector for policy expiry

use crate::{DomainError, PolicyDate};
use std::fmt;
use std::str::FromStr;

/// A (month, year) pair selecting every policy that expires within it
///
/// Used only as a matching key; it is never stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeleteMonth {
    month: u32,
    year: i32,
}

impl DeleteMonth {
    /// Message shown when a delete month fails validation
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Delete month should be in the format MM-yyyy, with month between 01 and 12";

    /// Parse a delete month from `MM-yyyy` text
    ///
    /// # Examples
    ///
    /// ```
    /// use policybook_domain::DeleteMonth;
    ///
    /// let month = DeleteMonth::parse("11-2022").unwrap();
    /// assert_eq!(month.month(), 11);
    /// assert!(DeleteMonth::parse("13-2022").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let (month, year) = text.split_once('-').ok_or_else(Self::format_error)?;

        if month.len() != 2 || year.len() != 4 || !all_digits(month) || !all_digits(year) {
            return Err(Self::format_error());
        }

        let month: u32 = month.parse().map_err(|_| Self::format_error())?;
        let year: i32 = year.parse().map_err(|_| Self::format_error())?;

        if !(1..=12).contains(&month) {
            return Err(Self::format_error());
        }

        Ok(Self { month, year })
    }

    /// Month of year (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Check whether an expiry date falls within this month
    pub fn matches(&self, expiry_date: &PolicyDate) -> bool {
        expiry_date.month() == self.month && expiry_date.year() == self.year
    }

    fn format_error() -> DomainError {
        DomainError::invalid_format(Self::MESSAGE_CONSTRAINTS)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for DeleteMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DeleteMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month, self.year)
    }
}
