//! Project and user-level directory layout
//!
//! A project is any directory containing a `buildkit.toml` marker. All
//! project paths are derived from that root:
//!
//! ```text
//! <root>/
//!   buildkit.toml
//!   .buildkit/        state directory
//!     build/          build output
//!   meta/
//!     targets/        project-local target declarations
//!   src/              component manifests live anywhere below here
//! ```
//!
//! The user-level state lives in `$BUILDKIT_HOME`, or `~/.buildkit`:
//!
//! ```text
//! ~/.buildkit/
//!   target/           global target declarations
//!   buildkit.log
//! ```
//!
//! Nothing is cached; the root is searched again on every call.

use crate::{BuildkitPath, Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the user-level state directory.
pub const HOME_ENV: &str = "BUILDKIT_HOME";

/// Walk upward from `start` to the nearest directory holding the marker.
pub fn find_root_from(start: &Path) -> Option<PathBuf> {
    let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    start
        .ancestors()
        .find(|dir| dir.join(BuildkitPath::ProjectMarker).is_file())
        .map(Path::to_path_buf)
}

/// Walk upward from the process working directory.
pub fn find_root() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| find_root_from(&cwd))
}

/// Canonical paths of a located project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Wrap an already known project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the project containing `start`.
    pub fn locate(start: &Path) -> Result<Self> {
        find_root_from(start)
            .map(Self::new)
            .ok_or_else(|| Error::ProjectNotFound {
                start: start.to_path_buf(),
            })
    }

    /// Locate the project containing `start`, if any.
    pub fn try_locate(start: &Path) -> Option<Self> {
        find_root_from(start).map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker(&self) -> PathBuf {
        self.root.join(BuildkitPath::ProjectMarker)
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(BuildkitPath::StateDir)
    }

    pub fn build_dir(&self) -> PathBuf {
        self.state_dir().join(BuildkitPath::BuildDir)
    }

    pub fn meta_dir(&self) -> PathBuf {
        self.root.join(BuildkitPath::MetaDir)
    }

    pub fn targets_dir(&self) -> PathBuf {
        self.meta_dir().join(BuildkitPath::TargetsDir)
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(BuildkitPath::SourceDir)
    }

    /// Change the process working directory to the project root.
    pub fn enter(&self) -> Result<()> {
        tracing::debug!(root = %self.root.display(), "Entering project root");
        std::env::set_current_dir(&self.root).map_err(|e| Error::io(&self.root, e))
    }
}

/// Locate the project above the process working directory and enter it.
pub fn chdir() -> Result<ProjectLayout> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    let layout = ProjectLayout::locate(&cwd)?;
    layout.enter()?;
    Ok(layout)
}

/// User-level (global) state directory shared by every project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalLayout {
    state_dir: PathBuf,
}

impl GlobalLayout {
    /// Use an explicit state directory.
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// Resolve from `$BUILDKIT_HOME`, falling back to `~/.buildkit`.
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(PathBuf::from(dir)));
        }
        let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
        Ok(Self::new(home.join(BuildkitPath::StateDir)))
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn target_dir(&self) -> PathBuf {
        self.state_dir.join(BuildkitPath::GlobalTargetDir)
    }

    pub fn log_file(&self) -> PathBuf {
        self.state_dir.join(BuildkitPath::LogFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_project(dir: &Path) {
        fs::write(
            dir.join("buildkit.toml"),
            "[project]\nname = \"demo\"\n",
        )
        .unwrap();
    }

    #[test]
    fn finds_root_at_start() {
        let temp = TempDir::new().unwrap();
        make_project(temp.path());

        let root = find_root_from(temp.path()).unwrap();
        assert_eq!(root, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn finds_root_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        make_project(temp.path());
        let nested = temp.path().join("src").join("app").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let root = find_root_from(&nested).unwrap();
        assert_eq!(root, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn nearest_marker_wins() {
        let temp = TempDir::new().unwrap();
        make_project(temp.path());
        let inner = temp.path().join("vendor").join("inner");
        fs::create_dir_all(&inner).unwrap();
        make_project(&inner);

        let root = find_root_from(&inner.join(".")).unwrap();
        assert_eq!(root, dunce::canonicalize(&inner).unwrap());
    }

    #[test]
    fn marker_directory_is_not_a_marker() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("buildkit.toml")).unwrap();

        assert!(ProjectLayout::try_locate(temp.path()).is_none());
    }

    #[test]
    fn locate_without_marker_is_project_not_found() {
        let temp = TempDir::new().unwrap();
        let err = ProjectLayout::locate(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound { .. }));
    }

    #[test]
    fn derived_paths() {
        let layout = ProjectLayout::new("/work/proj");
        assert_eq!(layout.state_dir(), Path::new("/work/proj/.buildkit"));
        assert_eq!(layout.build_dir(), Path::new("/work/proj/.buildkit/build"));
        assert_eq!(layout.meta_dir(), Path::new("/work/proj/meta"));
        assert_eq!(layout.targets_dir(), Path::new("/work/proj/meta/targets"));
        assert_eq!(layout.src_dir(), Path::new("/work/proj/src"));
    }

    #[test]
    fn global_paths() {
        let global = GlobalLayout::new("/home/dev/.buildkit");
        assert_eq!(global.target_dir(), Path::new("/home/dev/.buildkit/target"));
        assert_eq!(global.log_file(), Path::new("/home/dev/.buildkit/buildkit.log"));
    }
}
