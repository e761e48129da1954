//! Agent bridge configuration inspector
//!
//! Resolves configuration the way the agent does for a given host, using
//! `ClientInfo` and `ExtensionConfiguration` payloads captured to files.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `warn`, `debug` with `--verbose`)

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "warn" };
    bridge_config::logging::init_with_default(default_directive)
        .map_err(|e| CliError::user(format!("Failed to initialise logging: {}", e)))?;
    tracing::debug!("Verbose mode enabled");

    let resolver = commands::build_resolver(
        cli.client_info.as_deref(),
        cli.extension_config.as_deref(),
        &cli.overrides,
    )?;

    match cli.command {
        Commands::Get { path, default } => commands::run_get(&resolver, &path, default.as_deref()),
        Commands::Has { path } => commands::run_has(&resolver, &path),
        Commands::Dump => commands::run_dump(&resolver),
    }
}
