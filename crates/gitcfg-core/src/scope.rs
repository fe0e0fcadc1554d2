//! Opening configuration handles

use std::path::PathBuf;

use git2::{Config, Repository};

use crate::{Error, Result};

/// Which configuration files a handle covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigScope {
    /// Global, XDG, system and ProgramData files.
    #[default]
    Default,

    /// Everything visible from a repository, including its local config.
    Repository(PathBuf),

    /// A single config file, reported at the local level.
    File(PathBuf),
}

/// Open a configuration handle for `scope`.
///
/// With `snapshot` set the returned handle is a frozen, read-only view taken
/// at open time. The handle is released when dropped.
pub fn open(scope: &ConfigScope, snapshot: bool) -> Result<Config> {
    let mut config = match scope {
        ConfigScope::Default => Config::open_default()?,
        ConfigScope::Repository(path) => {
            let repo = Repository::open(path).map_err(|e| Error::InvalidScope {
                path: path.clone(),
                message: e.message().to_string(),
            })?;
            repo.config()?
        }
        ConfigScope::File(path) => Config::open(path)?,
    };

    tracing::debug!(?scope, snapshot, "Opened git config");

    if snapshot {
        config = config.snapshot()?;
    }
    Ok(config)
}
