//! Batch set / delete

use std::process::ExitCode;

use colored::Colorize;
use gitcfg_core::ConfigScope;

use crate::error::{CliError, Result};

/// Apply `assignments`, then delete `unset`, as one batch.
///
/// Malformed keys are reported as warnings and do not fail the command.
pub fn run_set(
    scope: &ConfigScope,
    assignments: Vec<(String, String)>,
    unset: Vec<String>,
) -> Result<ExitCode> {
    if assignments.is_empty() && unset.is_empty() {
        return Err(CliError::user(
            "Nothing to do. Pass KEY=VALUE assignments or --unset KEY.",
        ));
    }

    let batch = assignments
        .into_iter()
        .map(|(k, v)| (k, Some(v)))
        .chain(unset.into_iter().map(|k| (k, None)));

    let report = scope.set_or_delete(batch)?;

    for warning in &report.warnings {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }
    tracing::debug!(
        applied = report.applied.len(),
        deleted = report.deleted.len(),
        skipped = report.skipped.len(),
        warnings = report.warnings.len(),
        "Applied config batch"
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_set_writes_file_scope() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "").unwrap();
        let scope = ConfigScope::File(path.clone());

        run_set(
            &scope,
            vec![("user.name".to_string(), "Alice".to_string())],
            vec![],
        )
        .unwrap();

        assert_eq!(scope.get_string("user.name").unwrap().as_deref(), Some("Alice"));
    }

    #[test]
    fn test_set_without_changes_is_user_error() {
        let err = run_set(&ConfigScope::Default, vec![], vec![]).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }
}
