//! Configuration entries as enumerated from a backend

use crate::{ConfigLevel, Error, Result};

/// A single `name = value` occurrence read from the configuration backend.
///
/// `L` is the level as reported by the source. It defaults to the libgit2
/// level, which may carry tiers outside [`ConfigLevel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry<L = git2::ConfigLevel> {
    /// Fully qualified key, e.g. `user.name`
    pub name: String,

    /// Raw value; empty for a bare boolean key
    pub value: String,

    /// Level the entry was defined at
    pub level: L,
}

impl<L> ConfigEntry<L> {
    pub fn new(name: impl Into<String>, value: impl Into<String>, level: L) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            level,
        }
    }
}

impl<L> ConfigEntry<L>
where
    L: Copy + TryInto<ConfigLevel, Error = Error>,
{
    /// Resolve the reported level to a canonical [`ConfigLevel`].
    pub fn config_level(&self) -> Result<ConfigLevel> {
        self.level.try_into()
    }
}

impl ConfigEntry {
    /// Copy an entry out of a libgit2 iteration.
    pub fn from_git2(entry: &git2::ConfigEntry<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(entry.name_bytes()).into_owned(),
            value: if entry.has_value() {
                String::from_utf8_lossy(entry.value_bytes()).into_owned()
            } else {
                String::new()
            },
            level: entry.level(),
        }
    }
}
