//! Git repository fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Initialises a real git repository using `git2`.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// A temporary git repository whose local config file can be inspected and
/// rewritten directly.
///
/// # Example
///
/// ```rust,no_run
/// use gitcfg_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write_local_config("[user]\n\tname = Alice\n");
/// repo.assert_config_contains("name = Alice");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create a temporary directory holding a freshly initialised repository.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        real_git_repo(temp_dir.path());
        Self { temp_dir }
    }

    /// Return the working directory of the repository.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the repository-local config file.
    pub fn config_path(&self) -> PathBuf {
        self.root().join(".git").join("config")
    }

    /// Append `contents` to the local config file.
    pub fn write_local_config(&self, contents: &str) {
        let mut existing = fs::read_to_string(self.config_path()).unwrap_or_default();
        existing.push_str(contents);
        fs::write(self.config_path(), existing)
            .unwrap_or_else(|e| panic!("TestRepo: failed to write local config: {e}"));
    }

    /// Hold the local config lock so that writes fail.
    pub fn lock_config(&self) {
        fs::write(self.root().join(".git").join("config.lock"), "")
            .unwrap_or_else(|e| panic!("TestRepo: failed to create config.lock: {e}"));
    }

    /// Assert that the local config file contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_config_contains(&self, content: &str) {
        let file_content = fs::read_to_string(self.config_path())
            .unwrap_or_else(|_| panic!("Could not read {}", self.config_path().display()));
        assert!(
            file_content.contains(content),
            "Local config does not contain expected content.\nExpected: {}\nActual: {}",
            content,
            file_content
        );
    }
}
