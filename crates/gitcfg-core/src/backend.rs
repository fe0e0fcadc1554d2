//! Configuration backend seam

use git2::Config;

use crate::{ConfigEntry, Error, Result};

/// Operations this crate needs from a configuration store.
///
/// Not-found lookups are reported as `Ok(None)`. Everything else the store
/// rejects comes back as an [`Error`].
pub trait ConfigBackend {
    /// Every entry at every level, in the store's enumeration order.
    fn read_entries(&self) -> Result<Vec<ConfigEntry>>;

    /// Resolved string value of `name`, honouring level precedence.
    fn get_string(&self, name: &str) -> Result<Option<String>>;

    /// Resolved boolean value of `name`.
    fn get_bool(&self, name: &str) -> Result<Option<bool>>;

    /// Write `name = value` at the highest writable level.
    fn set_string(&mut self, name: &str, value: &str) -> Result<()>;

    /// Remove `name` from the highest writable level.
    fn delete(&mut self, name: &str) -> Result<()>;
}

/// Map a not-found lookup to `None`.
fn optional<T>(result: std::result::Result<T, git2::Error>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(Error::from(e)),
    }
}

impl ConfigBackend for Config {
    fn read_entries(&self) -> Result<Vec<ConfigEntry>> {
        let mut entries = Vec::new();
        let mut iter = self.entries(None)?;
        while let Some(entry) = iter.next() {
            entries.push(ConfigEntry::from_git2(entry?));
        }
        tracing::debug!(count = entries.len(), "Enumerated git config entries");
        Ok(entries)
    }

    fn get_string(&self, name: &str) -> Result<Option<String>> {
        optional(Config::get_string(self, name))
    }

    fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        optional(Config::get_bool(self, name))
    }

    fn set_string(&mut self, name: &str, value: &str) -> Result<()> {
        self.set_str(name, value)?;
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.remove(name)?;
        Ok(())
    }
}
