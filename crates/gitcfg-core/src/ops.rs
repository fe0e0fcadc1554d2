//! Listing, lookup and batch mutation of configuration entries

use std::fmt;

use crate::backend::ConfigBackend;
use crate::scope::{self, ConfigScope};
use crate::{LeveledConfig, Result};

/// A batch key rejected by the backend's key-name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKeyWarning {
    pub key: String,
    pub message: String,
}

impl fmt::Display for InvalidKeyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable was not in a valid format: '{}'", self.key)
    }
}

/// Outcome of [`set_or_delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Keys written
    pub applied: Vec<String>,

    /// Keys removed
    pub deleted: Vec<String>,

    /// Deletions of keys that were not set
    pub skipped: Vec<String>,

    /// Keys rejected as malformed
    pub warnings: Vec<InvalidKeyWarning>,
}

impl BatchReport {
    /// True when no key was rejected.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Enumerate every entry of `backend` grouped by level.
pub fn list_config<B: ConfigBackend + ?Sized>(backend: &B) -> Result<LeveledConfig> {
    let entries = backend.read_entries()?;
    LeveledConfig::from_entries(&entries)
}

/// Resolved value of `name`, or `None` when it is not set at any level.
pub fn get_string<B: ConfigBackend + ?Sized>(backend: &B, name: &str) -> Result<Option<String>> {
    backend.get_string(name)
}

/// Resolved boolean value of `name`, or `None` when it is not set.
pub fn get_bool<B: ConfigBackend + ?Sized>(backend: &B, name: &str) -> Result<Option<bool>> {
    backend.get_bool(name)
}

/// Apply a batch of upserts (`Some`) and deletions (`None`) in order.
///
/// Malformed keys are recorded as warnings in the report and skipped. Any
/// other backend error stops the batch; entries already processed stay
/// applied.
pub fn set_or_delete<B, I, K, V>(backend: &mut B, entries: I) -> Result<BatchReport>
where
    B: ConfigBackend + ?Sized,
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut report = BatchReport::default();

    for (key, value) in entries {
        let key = key.as_ref();
        let result = match &value {
            Some(value) => backend.set_string(key, value.as_ref()),
            None => backend.delete(key),
        };

        match result {
            Ok(()) => match value {
                Some(_) => report.applied.push(key.to_string()),
                None => report.deleted.push(key.to_string()),
            },
            Err(e) if value.is_none() && e.is_not_found() => {
                tracing::debug!(key, "Config key not set, nothing to delete");
                report.skipped.push(key.to_string());
            }
            Err(e) if e.is_invalid_spec() => {
                let warning = InvalidKeyWarning {
                    key: key.to_string(),
                    message: e.to_string(),
                };
                tracing::debug!(key, error = %e, "{}", warning);
                report.warnings.push(warning);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

impl ConfigScope {
    /// Open a handle for this scope. See [`scope::open`].
    pub fn open(&self, snapshot: bool) -> Result<git2::Config> {
        scope::open(self, snapshot)
    }

    /// All entries visible from this scope, grouped by level.
    pub fn list(&self) -> Result<LeveledConfig> {
        let config = self.open(false)?;
        list_config(&config)
    }

    /// Resolved string value of `name`, read from a snapshot.
    pub fn get_string(&self, name: &str) -> Result<Option<String>> {
        let config = self.open(true)?;
        get_string(&config, name)
    }

    /// Resolved boolean value of `name`, read from a snapshot.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        let config = self.open(true)?;
        get_bool(&config, name)
    }

    /// Apply a batch of upserts and deletions to this scope.
    ///
    /// An empty batch does not open the configuration.
    pub fn set_or_delete<I, K, V>(&self, entries: I) -> Result<BatchReport>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return Ok(BatchReport::default());
        }

        let mut config = self.open(false)?;
        set_or_delete(&mut config, entries)
    }
}
