//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{Command, LoadArgs};
use crate::commands::{self, batch_delete, find};
use crate::config::{config_dir, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::parser;
use policybook_domain::PersonStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl<S>(store: &S, config: &Config, formatter: &Formatter) -> Result<()>
where
    S: PersonStore,
    CliError: From<S::Error>,
{
    println!("{}", formatter.info("Policybook REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("policybook> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = commands::execute_command(cmd, store, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
///
/// The first word picks the command; the rest of the line is handed to it
/// unsplit so company names keep their spaces.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word {
        "" => Err(CliError::InvalidInput("Empty command".to_string())),
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        batch_delete::COMMAND_WORD => Ok(ReplCommand::Command(Command::BatchDelete(
            parser::parse_selector(rest, batch_delete::MESSAGE_USAGE)?,
        ))),
        "find" => Ok(ReplCommand::Command(Command::Find(find::parse_find(rest)?))),
        "list" => Ok(ReplCommand::Command(Command::List)),
        "load" => parse_load_command(rest),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            word
        ))),
    }
}

fn parse_load_command(rest: &str) -> Result<ReplCommand> {
    let file = rest.trim();
    if file.is_empty() {
        return Err(CliError::InvalidInput("Usage: load <file>".to_string()));
    }

    Ok(ReplCommand::Command(Command::Load(LoadArgs {
        file: file.to_string(),
    })))
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  batchdelete month/MM-yyyy        - Delete people whose policy expires in the month");
    println!("  batchdelete company/COMPANY NAME - Delete people whose policy company matches");
    println!("  find month/MM-yyyy               - List people whose policy expires in the month");
    println!("  find company/COMPANY NAME        - List people whose policy company matches");
    println!("  list                             - List all people");
    println!("  load <file>                      - Load people from a JSON file");
    println!("  help, ?                          - Show this help");
    println!("  exit, quit, q                    - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_and_help() {
        assert!(matches!(parse_repl_command("exit"), Ok(ReplCommand::Exit)));
        assert!(matches!(parse_repl_command("q"), Ok(ReplCommand::Exit)));
        assert!(matches!(parse_repl_command("?"), Ok(ReplCommand::Help)));
    }

    #[test]
    fn test_batchdelete_line() {
        match parse_repl_command("batchdelete company/Great Eastern") {
            Ok(ReplCommand::Command(Command::BatchDelete(args))) => {
                assert_eq!(args.company.as_deref(), Some("Great Eastern"));
            }
            other => panic!("Expected BatchDelete, got {:?}", other),
        }
    }

    #[test]
    fn test_batchdelete_without_selector() {
        assert!(matches!(
            parse_repl_command("batchdelete"),
            Err(CliError::MalformedCommand(_))
        ));
    }

    #[test]
    fn test_find_and_list_lines() {
        assert!(matches!(
            parse_repl_command("find month/11-2022"),
            Ok(ReplCommand::Command(Command::Find(_)))
        ));
        assert!(matches!(
            parse_repl_command("list"),
            Ok(ReplCommand::Command(Command::List))
        ));
    }

    #[test]
    fn test_load_line() {
        match parse_repl_command("load  clients.json ") {
            Ok(ReplCommand::Command(Command::Load(args))) => assert_eq!(args.file, "clients.json"),
            other => panic!("Expected Load, got {:?}", other),
        }
        assert!(matches!(
            parse_repl_command("load"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            parse_repl_command("delete 1"),
            Err(CliError::InvalidInput(_))
        ));
    }
}
