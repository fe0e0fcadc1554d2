//! Error types for gitcfg-core

use std::path::PathBuf;

use git2::ErrorCode;

/// Result type for gitcfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing git configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration scope {}: {message}", path.display())]
    InvalidScope { path: PathBuf, message: String },

    #[error("Unexpected config level: {level}")]
    UnrecognizedLevel { level: String },

    #[error("Git config error: {0}")]
    Backend(#[from] git2::Error),
}

impl Error {
    /// True when the backend reported that the key is not set.
    pub fn is_not_found(&self) -> bool {
        self.backend_code() == Some(ErrorCode::NotFound)
    }

    /// True when the backend rejected a key name as malformed.
    pub fn is_invalid_spec(&self) -> bool {
        self.backend_code() == Some(ErrorCode::InvalidSpec)
    }

    fn backend_code(&self) -> Option<ErrorCode> {
        match self {
            Error::Backend(e) => Some(e.code()),
            _ => None,
        }
    }
}
