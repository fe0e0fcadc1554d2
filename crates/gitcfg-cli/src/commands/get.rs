//! Single-key lookup

use std::process::ExitCode;

use gitcfg_core::{ConfigScope, ops};

use crate::error::Result;

/// Print the resolved value of `name`.
///
/// Returns a failure exit code without output when the key is not set.
pub fn run_get(scope: &ConfigScope, name: &str, as_bool: bool, snapshot: bool) -> Result<ExitCode> {
    match lookup(scope, name, as_bool, snapshot)? {
        Some(value) => {
            println!("{}", value);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            tracing::debug!(name, "Config key not set");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn lookup(scope: &ConfigScope, name: &str, as_bool: bool, snapshot: bool) -> Result<Option<String>> {
    let config = scope.open(snapshot)?;
    let value = if as_bool {
        ops::get_bool(&config, name)?.map(|b| b.to_string())
    } else {
        ops::get_string(&config, name)?
    };
    Ok(value)
}
