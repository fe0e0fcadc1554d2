//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gitcfg_core::ConfigScope;

/// gitcfg - Inspect and edit git configuration level by level
#[derive(Parser, Debug)]
#[command(name = "gitcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use the configuration of the repository at PATH
    #[arg(long, global = true, value_name = "PATH", env = "GITCFG_REPO")]
    pub repo: Option<PathBuf>,

    /// Use a single configuration file
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "GITCFG_FILE",
        conflicts_with = "repo"
    )]
    pub file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration scope selected by `--file` / `--repo`.
    pub fn scope(&self) -> ConfigScope {
        match (&self.file, &self.repo) {
            (Some(file), _) => ConfigScope::File(file.clone()),
            (None, Some(repo)) => ConfigScope::Repository(repo.clone()),
            (None, None) => ConfigScope::Default,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every entry grouped by level
    ///
    /// Levels are shown from lowest to highest precedence. A key defined
    /// more than once is listed once per occurrence.
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved value of a key
    ///
    /// Exits with status 1 and prints nothing when the key is not set.
    Get {
        /// Key to look up, e.g. user.name
        name: String,

        /// Interpret the value as a boolean
        #[arg(long = "bool")]
        as_bool: bool,

        /// Read the live configuration instead of a snapshot
        #[arg(long)]
        no_snapshot: bool,
    },

    /// Set and delete keys in one batch
    ///
    /// Examples:
    ///   gitcfg set user.name=Alice user.email=alice@example.com
    ///   gitcfg set --unset core.editor
    Set {
        /// Assignments to apply
        #[arg(value_name = "KEY=VALUE", value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,

        /// Keys to delete after the assignments
        #[arg(long = "unset", value_name = "KEY")]
        unset: Vec<String>,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}
