//! Command implementations.

pub mod batch_delete;
pub mod find;
pub mod list;
pub mod load;

pub use self::batch_delete::{execute_batch_delete, BatchDeleteCommand, BatchDeleteSelector};
pub use self::find::execute_find;
pub use self::list::execute_list;
pub use self::load::execute_load;

use crate::cli::Command;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use policybook_domain::PersonStore;

/// Run one command against the store.
///
/// Shared by one-shot invocations and the REPL.
pub fn execute_command<S>(cmd: Command, store: &S, formatter: &Formatter) -> Result<()>
where
    S: PersonStore,
    CliError: From<S::Error>,
{
    match cmd {
        Command::BatchDelete(args) => execute_batch_delete(args, store, formatter),
        Command::Find(args) => execute_find(args, store, formatter),
        Command::List => execute_list(store, formatter),
        Command::Load(args) => execute_load(args, store, formatter),
        Command::Repl => Err(CliError::InvalidInput(
            "Already in interactive mode".to_string(),
        )),
    }
}

/// Outcome of a command that mutated the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,

    /// Number of people added or removed
    pub affected: usize,
}
