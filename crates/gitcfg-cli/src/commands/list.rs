//! Level-grouped listing

use std::fmt::Write;
use std::process::ExitCode;

use colored::Colorize;
use gitcfg_core::{ConfigScope, LeveledConfig};

use crate::error::Result;

/// List every entry of `scope` grouped by level.
pub fn run_list(scope: &ConfigScope, json: bool) -> Result<ExitCode> {
    let config = scope.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", render(&config));
    }
    Ok(ExitCode::SUCCESS)
}

/// Human readable listing, one header per level.
pub fn render(config: &LeveledConfig) -> String {
    if config.is_empty() {
        return format!("{}\n", "(no configuration entries)".dimmed());
    }

    let mut out = String::new();
    for (i, (level, entries)) in config.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", level.name().green().bold());
        for (key, value) in entries.iter() {
            let _ = writeln!(out, "  {} = {}", key, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitcfg_core::ConfigEntry;

    #[test]
    fn test_render_lists_levels_and_pairs() {
        let entries = vec![
            ConfigEntry::new("user.name", "Bob", "global"),
            ConfigEntry::new("user.name", "Alice", "local"),
        ];
        let config = LeveledConfig::from_entries(&entries).unwrap();

        let out = render(&config);
        let global_at = out.find("global").unwrap();
        let local_at = out.find("local").unwrap();

        assert!(global_at < local_at);
        assert!(out.contains("  user.name = Bob\n"));
        assert!(out.contains("  user.name = Alice\n"));
    }

    #[test]
    fn test_render_empty() {
        let out = render(&LeveledConfig::default());
        assert!(out.contains("no configuration entries"));
    }
}
