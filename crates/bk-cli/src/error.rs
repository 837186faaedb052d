//! Error types for bk-cli

use crate::args::ArgType;
use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while resolving, binding or running a command
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from bk-meta
    #[error(transparent)]
    Meta(#[from] bk_meta::Error),

    /// Error from bk-fs
    #[error(transparent)]
    Fs(#[from] bk_fs::Error),

    /// Standard I/O error, usually while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("Invalid argument: {token}")]
    UnexpectedPositional { token: String },

    #[error("Argument {name} is required")]
    MissingRequiredArgument { name: String },

    #[error("Argument {name} expects {expected}, got {value:?}")]
    InvalidArgumentValue {
        name: String,
        expected: ArgType,
        value: String,
    },

    #[error("List argument {name} must be comma separated, got {value:?}")]
    InvalidListFormat { name: String, value: String },

    #[error("No component specified, use `buildkit list` to list components")]
    NoComponentSpecified,

    #[error("No build directory found at {path}")]
    BuildDirNotFound { path: PathBuf },

    #[error("No buildkit directory found at {path}")]
    StateDirNotFound { path: PathBuf },

    #[error("Build graph generation failed: {message}")]
    Generator { message: String },
}
