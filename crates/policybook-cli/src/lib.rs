//! Policybook CLI library.
//!
//! This library provides the core functionality for the Policybook command-line
//! interface, including configuration management, the `batchdelete` command,
//! the REPL and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
