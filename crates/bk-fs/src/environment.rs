//! Invocation environment
//!
//! Captures where a command was invoked from and which user-level state
//! directory it uses. The binary builds one from the process; tests build
//! one around temporary directories.

use crate::{Error, GlobalLayout, ProjectLayout, Result};
use std::path::PathBuf;

/// Working directory and global layout of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub cwd: PathBuf,
    pub global: GlobalLayout,
}

impl Environment {
    pub fn new(cwd: impl Into<PathBuf>, global: GlobalLayout) -> Self {
        Self {
            cwd: cwd.into(),
            global,
        }
    }

    /// Read the working directory and `$BUILDKIT_HOME` of this process.
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Ok(Self::new(cwd, GlobalLayout::from_env()?))
    }

    /// The enclosing project, searched afresh on every call.
    pub fn project(&self) -> Option<ProjectLayout> {
        ProjectLayout::try_locate(&self.cwd)
    }

    /// The enclosing project, or `ProjectNotFound`.
    pub fn require_project(&self) -> Result<ProjectLayout> {
        ProjectLayout::locate(&self.cwd)
    }
}
