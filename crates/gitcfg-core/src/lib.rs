//! Level-aware access to git configuration
//!
//! Reads, enumerates and mutates git configuration through libgit2, grouping
//! enumerated entries by the precedence level that defined them.

pub mod aggregate;
pub mod backend;
pub mod entry;
pub mod error;
pub mod level;
pub mod ops;
pub mod scope;

pub use aggregate::{LevelCounts, LevelEntries, LeveledConfig, aggregate, count_by_level};
pub use backend::ConfigBackend;
pub use entry::ConfigEntry;
pub use error::{Error, Result};
pub use level::ConfigLevel;
pub use ops::{BatchReport, InvalidKeyWarning};
pub use scope::ConfigScope;
