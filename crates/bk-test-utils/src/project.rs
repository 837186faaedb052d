//! [`TestProject`] builder for buildkit test scenarios.

use bk_fs::{Environment, GlobalLayout};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory plus a private user-level state directory.
///
/// ```text
/// <tmp>/
///   project/      the project root (marker written by `new`)
///   home/         the user-level state dir, i.e. `$BUILDKIT_HOME`
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use bk_test_utils::TestProject;
///
/// let fixture = TestProject::new("kernel");
/// fixture.binary("app", "app");
/// fixture.global_target("host");
/// let env = fixture.env();
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    /// Create a project tree with a `buildkit.toml` naming `name`.
    pub fn new(name: &str) -> Self {
        let fixture = Self::bare();
        fixture.write(
            "buildkit.toml",
            &format!("[project]\nname = \"{name}\"\ndescription = \"Test project\"\n"),
        );
        fixture
    }

    /// Create the directories without any project marker.
    pub fn bare() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("project")).unwrap();
        Self { temp_dir }
    }

    /// The project root.
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// The user-level state directory (may not exist yet).
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// An environment invoked from the project root.
    pub fn env(&self) -> Environment {
        self.env_in(".")
    }

    /// An environment invoked from a subdirectory of the project root.
    pub fn env_in(&self, sub: &str) -> Environment {
        let cwd = self.root().join(sub);
        fs::create_dir_all(&cwd).unwrap();
        Environment::new(cwd, GlobalLayout::new(self.home()))
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        write_file(&self.root().join(rel), content)
    }

    /// Write a file relative to the user-level state directory.
    pub fn write_home(&self, rel: &str, content: &str) -> PathBuf {
        write_file(&self.home().join(rel), content)
    }

    /// Declare a binary component at `src/<dir>/manifest.toml`.
    pub fn binary(&self, dir: &str, name: &str) -> PathBuf {
        self.manifest(dir, "binary", name)
    }

    /// Declare a library component at `src/<dir>/manifest.toml`.
    pub fn library(&self, dir: &str, name: &str) -> PathBuf {
        self.manifest(dir, "library", name)
    }

    /// Declare a plugin component at `src/<dir>/manifest.toml`.
    pub fn plugin(&self, dir: &str, name: &str) -> PathBuf {
        self.manifest(dir, "plugin", name)
    }

    fn manifest(&self, dir: &str, table: &str, name: &str) -> PathBuf {
        self.write(
            &format!("src/{dir}/manifest.toml"),
            &format!("[{table}]\nname = \"{name}\"\ndescription = \"The {name} component\"\n"),
        )
    }

    /// Declare a complete target in the global target directory.
    pub fn global_target(&self, name: &str) -> PathBuf {
        self.write_home(&format!("target/{name}.toml"), &target_toml(name))
    }

    /// Declare a complete target in the project's `meta/targets/`.
    pub fn local_target(&self, name: &str) -> PathBuf {
        self.write(&format!("meta/targets/{name}.toml"), &target_toml(name))
    }

    /// Assert that a path relative to the project root exists.
    pub fn assert_exists(&self, rel: &str) {
        let path = self.root().join(rel);
        assert!(path.exists(), "expected {} to exist", path.display());
    }

    /// Assert that a path relative to the project root does not exist.
    pub fn assert_missing(&self, rel: &str) {
        let path = self.root().join(rel);
        assert!(!path.exists(), "expected {} to be absent", path.display());
    }
}

/// A target declaration providing every conventional tool role.
pub fn target_toml(name: &str) -> String {
    format!(
        r#"[target]
name = "{name}"

[target.props]
arch = "x86_64"
sys = "linux"
host = true

[target.tools.cc]
cmd = "gcc"
args = ["-Wall"]

[target.tools.cxx]
cmd = "g++"
args = ["-Wall"]

[target.tools.ld]
cmd = "g++"
args = []

[target.tools.ar]
cmd = "ar"
args = ["rcs"]

[target.tools.as]
cmd = "as"
args = []
"#
    )
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}
