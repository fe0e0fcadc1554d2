//! [`LayeredConfig`] builder for configs spanning several levels.
//!
//! Each level is backed by its own file in a temporary directory, so tests
//! never see the machine's global or system configuration.

use std::fs;
use std::path::PathBuf;

use git2::{Config, ConfigLevel};
use tempfile::TempDir;

/// Per-level config files combined into one `git2::Config`.
pub struct LayeredConfig {
    temp_dir: TempDir,
    files: Vec<(ConfigLevel, PathBuf)>,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredConfig {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            files: Vec::new(),
        }
    }

    /// Write `contents` as the file for `level`.
    pub fn level(mut self, level: ConfigLevel, contents: &str) -> Self {
        let path = self
            .temp_dir
            .path()
            .join(format!("{level:?}.gitconfig").to_lowercase());
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("LayeredConfig: failed to write {}: {e}", path.display()));
        self.files.push((level, path));
        self
    }

    /// Path of the file written for `level`.
    ///
    /// # Panics
    /// Panics if no file was written for `level`.
    pub fn path(&self, level: ConfigLevel) -> &PathBuf {
        self.files
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, p)| p)
            .unwrap_or_else(|| panic!("LayeredConfig: no file for {level:?}"))
    }

    /// Open a fresh handle over every level written so far.
    pub fn open(&self) -> Config {
        let mut config = Config::new().unwrap();
        for (level, path) in &self.files {
            config
                .add_file(path, *level, false)
                .unwrap_or_else(|e| panic!("LayeredConfig: failed to add {level:?}: {e}"));
        }
        config
    }
}
