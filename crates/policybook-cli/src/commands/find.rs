//! Find command implementation.

use super::BatchDeleteSelector;
use crate::cli::SelectorArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::parser;
use policybook_domain::{Person, PersonStore};
use tracing::debug;

/// Usage text shown when the command is malformed.
pub const MESSAGE_USAGE: &str = "find: lists every person whose policy\n\
    (i) expires in the given month and year, OR\n\
    (ii) is issued by the given company.\n\
    Example: find month/11-2022\n\
    Example: find company/Allianz";

/// Parse the REPL form of `find` into selector arguments.
pub fn parse_find(args: &str) -> Result<SelectorArgs> {
    parser::parse_selector(args, MESSAGE_USAGE)
}

/// People a batch delete with the same selector would remove.
pub fn find_matching<S>(selector: &BatchDeleteSelector, store: &S) -> Result<Vec<Person>>
where
    S: PersonStore,
    CliError: From<S::Error>,
{
    let people = store.filter_people(&*selector.predicate())?;
    debug!(criterion = %selector.criterion(), matched = people.len(), "Find complete");
    Ok(people)
}

/// Execute the find command.
pub fn execute_find<S>(args: SelectorArgs, store: &S, formatter: &Formatter) -> Result<()>
where
    S: PersonStore,
    CliError: From<S::Error>,
{
    let selector = BatchDeleteSelector::from_args(args, MESSAGE_USAGE)?;
    let people = find_matching(&selector, store)?;

    println!("{}", formatter.format_people(&people)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use policybook_domain::{Company, Policy, PolicyDate, PolicyNumber};
    use policybook_store::InMemoryStore;

    #[test]
    fn test_find_does_not_remove() {
        let policy = Policy::new(
            Company::parse("AIA").unwrap(),
            PolicyNumber::parse("A1").unwrap(),
            PolicyDate::parse("01-01-2022").unwrap(),
            PolicyDate::parse("20-03-2023").unwrap(),
        );
        let store = InMemoryStore::with_people([
            Person::new("Alex", Some(policy)).unwrap(),
            Person::new("Bernice", None).unwrap(),
        ])
        .unwrap();

        let args = parse_find("month/03-2023").unwrap();
        let selector = BatchDeleteSelector::from_args(args, MESSAGE_USAGE).unwrap();
        let found = find_matching(&selector, &store).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Alex");
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_find_usage_on_malformed() {
        match parse_find("Allianz") {
            Err(CliError::MalformedCommand(usage)) => assert!(usage.starts_with("find:")),
            other => panic!("Expected MalformedCommand, got {:?}", other),
        }
    }
}
