//! CLI command definitions and argument parsing.

use clap::{ArgGroup, Parser, Subcommand};

/// Policybook - Manage insurance clients and their policies.
#[derive(Debug, Parser)]
#[command(name = "policybook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// JSON file of people to load before running the command
    #[arg(short, long, global = true, env = "POLICYBOOK_DATA")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Delete every person whose policy matches a month or company
    #[command(name = "batchdelete")]
    BatchDelete(SelectorArgs),

    /// List the people whose policy matches a month or company
    Find(SelectorArgs),

    /// List all people
    List,

    /// Load people from a JSON file
    Load(LoadArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Policy selector shared by `batchdelete` and `find`.
///
/// Exactly one of `--month` and `--company` must be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(group(
    ArgGroup::new("selector")
        .required(true)
        .multiple(false)
        .args(["month", "company"])
))]
pub struct SelectorArgs {
    /// Policy expiry month (MM-yyyy)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Policy company name; any whole word matches
    #[arg(short = 'o', long)]
    pub company: Option<String>,
}

/// Arguments for the load command.
#[derive(Debug, Parser)]
pub struct LoadArgs {
    /// JSON file containing an array of people
    pub file: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["policybook"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_batchdelete_by_month() {
        let cli = Cli::parse_from(["policybook", "batchdelete", "--month", "11-2022"]);
        match cli.command {
            Some(Command::BatchDelete(args)) => {
                assert_eq!(args.month.as_deref(), Some("11-2022"));
                assert!(args.company.is_none());
            }
            _ => panic!("Expected BatchDelete command"),
        }
    }

    #[test]
    fn test_batchdelete_by_company() {
        let cli = Cli::parse_from(["policybook", "batchdelete", "--company", "Allianz Group"]);
        match cli.command {
            Some(Command::BatchDelete(args)) => {
                assert_eq!(args.company.as_deref(), Some("Allianz Group"));
            }
            _ => panic!("Expected BatchDelete command"),
        }
    }

    #[test]
    fn test_selector_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["policybook", "batchdelete"]).is_err());
        assert!(Cli::try_parse_from([
            "policybook",
            "batchdelete",
            "--month",
            "11-2022",
            "--company",
            "Allianz",
        ])
        .is_err());
    }

    #[test]
    fn test_global_data_flag() {
        let cli = Cli::parse_from(["policybook", "list", "--data", "people.json"]);
        assert_eq!(cli.data.as_deref(), Some("people.json"));
        assert!(matches!(cli.command, Some(Command::List)));
    }
}
