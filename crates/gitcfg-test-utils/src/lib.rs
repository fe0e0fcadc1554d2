//! Fixtures for exercising git configuration without touching the
//! machine's own config files.
//!
//! [`TestRepo`] gives a throwaway repository whose local config can be
//! written, locked and inspected. [`LayeredConfig`] assembles a
//! `git2::Config` from one temporary file per level.

pub mod git;
pub mod layered;

pub use git::TestRepo;
pub use layered::LayeredConfig;
