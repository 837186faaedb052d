//! Error types for bk-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] bk_fs::Error),

    #[error("Invalid project file {path}: {message}")]
    ProjectParse { path: PathBuf, message: String },

    #[error("Invalid manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Invalid target {path}: {message}")]
    TargetParse { path: PathBuf, message: String },

    #[error("Component not found: {name}")]
    ManifestNotFound { name: String },

    #[error("Target not found: {name}")]
    TargetNotFound { name: String },
}
