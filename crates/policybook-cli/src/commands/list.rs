//! List command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use policybook_domain::PersonStore;

/// Execute the list command.
pub fn execute_list<S>(store: &S, formatter: &Formatter) -> Result<()>
where
    S: PersonStore,
    CliError: From<S::Error>,
{
    let people = store.people()?;
    println!("{}", formatter.format_people(&people)?);
    Ok(())
}
