//! Error types for bk-fs

use std::path::PathBuf;

/// Result type for bk-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bk-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No buildkit.toml found in any parent directory of {start}")]
    ProjectNotFound { start: PathBuf },

    #[error("Could not determine the user home directory")]
    HomeNotFound,

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
