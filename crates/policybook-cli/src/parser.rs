//! Prefix grammar for selector arguments typed in the REPL.
//!
//! `month/11-2022` and `company/Allianz Group` are recognised at the start of
//! the argument text or after whitespace. A value runs until the next prefix,
//! so company names may contain spaces.

use crate::cli::SelectorArgs;
use crate::error::{CliError, Result};

/// Prefix introducing a delete month.
pub const PREFIX_MONTH: &str = "month/";

/// Prefix introducing a company name.
pub const PREFIX_COMPANY: &str = "company/";

const PREFIXES: [&str; 2] = [PREFIX_MONTH, PREFIX_COMPANY];

/// Split selector text into exactly one month or company value.
///
/// # Errors
/// Returns [`CliError::MalformedCommand`] carrying `usage` when no prefix is
/// present, text precedes the first prefix, a prefix repeats, or both
/// prefixes are given. Values are not validated here.
pub fn parse_selector(args: &str, usage: &str) -> Result<SelectorArgs> {
    let malformed = || CliError::MalformedCommand(usage.to_string());
    let positions = prefix_positions(args);

    let first = positions.first().ok_or_else(malformed)?;
    if !args[..first.0].trim().is_empty() {
        return Err(malformed());
    }

    let mut selector = SelectorArgs::default();

    for (idx, &(start, prefix)) in positions.iter().enumerate() {
        let end = positions.get(idx + 1).map_or(args.len(), |&(next, _)| next);
        let value = args[start + prefix.len()..end].trim().to_string();

        let slot = if prefix == PREFIX_MONTH {
            &mut selector.month
        } else {
            &mut selector.company
        };
        if slot.replace(value).is_some() {
            return Err(malformed());
        }
    }

    if selector.month.is_some() && selector.company.is_some() {
        return Err(malformed());
    }

    Ok(selector)
}

/// Byte offsets of every prefix that starts a word, in order.
fn prefix_positions(args: &str) -> Vec<(usize, &'static str)> {
    let mut found = Vec::new();
    let mut at_word_start = true;

    for (i, c) in args.char_indices() {
        if at_word_start {
            if let Some(prefix) = PREFIXES.iter().find(|p| args[i..].starts_with(**p)) {
                found.push((i, *prefix));
            }
        }
        at_word_start = c.is_whitespace();
    }

    found
}
