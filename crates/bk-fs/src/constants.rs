//! Well-known file and directory names.

use std::path::Path;

/// Standard buildkit filesystem markers and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildkitPath {
    /// The `buildkit.toml` project marker at the project root
    ProjectMarker,
    /// The `.buildkit` state directory (project-local and user-level)
    StateDir,
    /// The `build` output directory inside the project state directory
    BuildDir,
    /// The `meta` metadata directory at the project root
    MetaDir,
    /// The `targets` directory inside the metadata directory
    TargetsDir,
    /// The `src` source directory at the project root
    SourceDir,
    /// The `target` directory inside the user-level state directory
    GlobalTargetDir,
    /// The `manifest.toml` component declaration file name
    ManifestFile,
    /// The `buildkit.log` log file inside the user-level state directory
    LogFile,
}

impl BuildkitPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectMarker => "buildkit.toml",
            Self::StateDir => ".buildkit",
            Self::BuildDir => "build",
            Self::MetaDir => "meta",
            Self::TargetsDir => "targets",
            Self::SourceDir => "src",
            Self::GlobalTargetDir => "target",
            Self::ManifestFile => "manifest.toml",
            Self::LogFile => "buildkit.log",
        }
    }
}

impl AsRef<Path> for BuildkitPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for BuildkitPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BuildkitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
