//! Load command implementation.

use super::CommandResult;
use crate::cli::LoadArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use policybook_domain::{Company, Person, PersonStore, Policy, PolicyDate, PolicyNumber};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Execute the load command.
pub fn execute_load<S>(args: LoadArgs, store: &S, formatter: &Formatter) -> Result<()>
where
    S: PersonStore,
    CliError: From<S::Error>,
{
    let result = load_into(&args.file, store)?;
    println!("{}", formatter.bulk_result("Loaded", result.affected));
    Ok(())
}

/// Read people from a JSON file and add them all to the store.
///
/// Every entry is validated before any is added, so a bad entry leaves the
/// store untouched.
pub fn load_into<S, P>(path: P, store: &S) -> Result<CommandResult>
where
    S: PersonStore,
    CliError: From<S::Error>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let people = read_people(path)?;
    let count = people.len();

    for person in people {
        store.add_person(person)?;
    }

    info!(count, file = %path.display(), "Loaded people");
    Ok(CommandResult {
        feedback: format!("Loaded {} people from {}", count, path.display()),
        affected: count,
    })
}

/// Parse a JSON array of people.
pub fn read_people(path: &Path) -> Result<Vec<Person>> {
    let json_data = fs::read_to_string(path)?;
    let defs: Vec<PersonDefinition> = serde_json::from_str(&json_data)?;

    defs.into_iter()
        .enumerate()
        .map(|(idx, def)| {
            def.into_person().map_err(|e| {
                warn!("Entry {} of {} rejected: {}", idx, path.display(), e);
                e
            })
        })
        .collect()
}

/// Person entry in an import file.
#[derive(Debug, Deserialize)]
struct PersonDefinition {
    name: String,
    #[serde(default)]
    policy: Option<PolicyDefinition>,
}

#[derive(Debug, Deserialize)]
struct PolicyDefinition {
    company: String,
    policy_number: String,
    issue_date: String,
    expiry_date: String,
}

impl PersonDefinition {
    fn into_person(self) -> Result<Person> {
        let policy = match self.policy {
            Some(def) => def.into_policy()?,
            None => None,
        };
        Ok(Person::new(&self.name, policy)?)
    }
}

impl PolicyDefinition {
    /// Older exports fill both dates with the placeholder when a person has no policy.
    fn into_policy(self) -> Result<Option<Policy>> {
        let issue_date = PolicyDate::parse(self.issue_date.trim())?;
        let expiry_date = PolicyDate::parse(self.expiry_date.trim())?;

        if issue_date.is_legacy_sentinel() && expiry_date.is_legacy_sentinel() {
            return Ok(None);
        }

        Ok(Some(Policy::new(
            Company::parse(&self.company)?,
            PolicyNumber::parse(&self.policy_number)?,
            issue_date,
            expiry_date,
        )))
    }
}
