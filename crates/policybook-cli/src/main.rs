//! Policybook CLI - Command-line interface for managing insurance clients.

use clap::Parser;
use policybook_cli::commands::{self, load};
use policybook_cli::repl;
use policybook_cli::{Cli, Command, Config, Formatter};
use policybook_store::InMemoryStore;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides the level)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> policybook_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::path() {
            Ok(path) => Config::load_or_default(path),
            Err(e) => {
                tracing::warn!("Falling back to default config: {}", e);
                Config::default()
            }
        },
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Records live only for this process
    let store = InMemoryStore::new();
    let data_file = cli
        .data
        .map(Into::into)
        .or_else(|| config.data_file.clone());
    if let Some(path) = data_file {
        load::load_into(&path, &store)?;
    }

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&store, &config, &formatter)?;
        }
        Some(cmd) => {
            commands::execute_command(cmd, &store, &formatter)?;
        }
    }

    Ok(())
}
