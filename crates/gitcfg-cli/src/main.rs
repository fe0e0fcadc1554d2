//! gitcfg CLI
//!
//! Lists, reads and edits git configuration with level awareness.

mod cli;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    let scope = cli.scope();
    tracing::debug!(?scope, "Resolved configuration scope");

    match cli.command {
        Commands::List { json } => commands::run_list(&scope, json),
        Commands::Get {
            name,
            as_bool,
            no_snapshot,
        } => commands::run_get(&scope, &name, as_bool, !no_snapshot),
        Commands::Set { assignments, unset } => commands::run_set(&scope, assignments, unset),
    }
}
