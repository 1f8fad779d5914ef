//! Batch delete command implementation.

use super::CommandResult;
use crate::cli::SelectorArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::parser::{self, PREFIX_COMPANY, PREFIX_MONTH};
use policybook_domain::{
    Company, CompanyContainsKeywords, DeleteMonth, PersonPredicate, PersonStore,
    PolicyExpiryInMonth,
};
use tracing::info;

/// Word that invokes the command.
pub const COMMAND_WORD: &str = "batchdelete";

/// Usage text shown when the command is malformed.
pub const MESSAGE_USAGE: &str = "batchdelete: deletes every person whose policy\n\
    (i) expires in the given month and year, OR\n\
    (ii) is issued by the given company.\n\
    (i) Parameter: month/MM-yyyy\n\
    Example: batchdelete month/11-2022\n\
    (ii) Parameter: company/COMPANY NAME\n\
    Example: batchdelete company/Allianz";

/// Prefix of the success message; the criterion follows it.
pub const MESSAGE_SUCCESS: &str = "Batch delete people in: ";

/// Which policies a batch operation selects.
///
/// A selector is either a month or a company, never both and never neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchDeleteSelector {
    /// Policies expiring within the month
    ByMonth(DeleteMonth),
    /// Policies whose company contains any word of the name
    ByCompany(Company),
}

impl BatchDeleteSelector {
    /// Validate selector arguments.
    ///
    /// # Errors
    /// [`CliError::MalformedCommand`] with `usage` unless exactly one of
    /// month and company is set; [`CliError::Domain`] if the value is invalid.
    pub fn from_args(args: SelectorArgs, usage: &str) -> Result<Self> {
        match (args.month, args.company) {
            (Some(month), None) => Ok(Self::ByMonth(DeleteMonth::parse(month.trim())?)),
            (None, Some(company)) => Ok(Self::ByCompany(Company::parse(&company)?)),
            _ => Err(CliError::MalformedCommand(usage.to_string())),
        }
    }

    /// Predicate matching the selected people.
    pub fn predicate(&self) -> Box<dyn PersonPredicate> {
        match self {
            Self::ByMonth(month) => Box::new(PolicyExpiryInMonth::new(*month)),
            Self::ByCompany(company) => {
                Box::new(CompanyContainsKeywords::new(company.keywords()))
            }
        }
    }

    /// Criterion as reported back to the user.
    pub fn criterion(&self) -> String {
        match self {
            Self::ByMonth(month) => month.to_string(),
            Self::ByCompany(company) => company.to_string(),
        }
    }
}

/// Removes every person whose policy matches the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDeleteCommand {
    selector: BatchDeleteSelector,
}

impl BatchDeleteCommand {
    /// Create a command for a selector.
    pub fn new(selector: BatchDeleteSelector) -> Self {
        Self { selector }
    }

    /// Parse the REPL form, e.g. `month/11-2022` or `company/Allianz`.
    pub fn parse(args: &str) -> Result<Self> {
        let selector = parser::parse_selector(args, MESSAGE_USAGE)?;
        Ok(Self::new(BatchDeleteSelector::from_args(selector, MESSAGE_USAGE)?))
    }

    /// The selector this command applies.
    pub fn selector(&self) -> &BatchDeleteSelector {
        &self.selector
    }

    /// Remove the selected people from the store.
    pub fn execute<S>(&self, store: &S) -> Result<CommandResult>
    where
        S: PersonStore,
        CliError: From<S::Error>,
    {
        let predicate = self.selector.predicate();
        let criterion = self.selector.criterion();

        let removed = store.batch_delete_with_predicate(&*predicate)?;
        info!(%criterion, removed, "Batch delete complete");

        Ok(CommandResult {
            feedback: format!("{}{}", MESSAGE_SUCCESS, criterion),
            affected: removed,
        })
    }
}

impl std::fmt::Display for BatchDeleteCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.selector {
            BatchDeleteSelector::ByMonth(month) => {
                write!(f, "{} {}{}", COMMAND_WORD, PREFIX_MONTH, month)
            }
            BatchDeleteSelector::ByCompany(company) => {
                write!(f, "{} {}{}", COMMAND_WORD, PREFIX_COMPANY, company)
            }
        }
    }
}

/// Execute the batch delete command.
pub fn execute_batch_delete<S>(
    args: SelectorArgs,
    store: &S,
    formatter: &Formatter,
) -> Result<()>
where
    S: PersonStore,
    CliError: From<S::Error>,
{
    let command = BatchDeleteCommand::new(BatchDeleteSelector::from_args(args, MESSAGE_USAGE)?);
    let result = command.execute(store)?;

    println!("{}", formatter.success(&result.feedback));
    if result.affected == 0 {
        println!("{}", formatter.warning("No people matched"));
    } else {
        println!("{}", formatter.bulk_result("Deleted", result.affected));
    }

    Ok(())
}
