//! Discovery and parsing of declaration files
//!
//! Manifests are found recursively below the source directory; targets are
//! the `*.toml` files directly inside a target directory. Every file is read
//! once: the same bytes are parsed and digested, so the digest always
//! matches what was parsed.

use crate::schema::manifest::ManifestFile;
use crate::schema::target::{TargetFile, ToolBody};
use crate::schema::{Manifest, Project, Target, Tool};
use crate::{Error, Result};
use bk_fs::{BuildkitPath, ProjectLayout, compute_bytes_checksum, io};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Load the project marker of a located project.
pub fn load_project(layout: &ProjectLayout) -> Result<Project> {
    let path = layout.marker();
    let bytes = io::read_bytes(&path)?;
    let content = utf8(&bytes).map_err(|message| Error::ProjectParse {
        path: path.clone(),
        message,
    })?;
    Project::from_toml(content).map_err(|e| Error::ProjectParse {
        path,
        message: e.to_string(),
    })
}

/// Parse one manifest declaration from its raw bytes.
pub fn parse_manifest(path: &Path, bytes: &[u8]) -> Result<Manifest> {
    let parse_err = |message: String| Error::ManifestParse {
        path: path.to_path_buf(),
        message,
    };

    let content = utf8(bytes).map_err(parse_err)?;
    let file: ManifestFile = toml::from_str(content).map_err(|e| parse_err(e.to_string()))?;

    let mut bodies = file.into_bodies();
    if bodies.len() != 1 {
        return Err(parse_err(format!(
            "expected exactly one of [binary], [library] or [plugin], found {}",
            bodies.len()
        )));
    }
    let (kind, body) = bodies.remove(0);

    Ok(Manifest {
        kind,
        hash: compute_bytes_checksum(bytes),
        name: body.name,
        path: path.to_path_buf(),
        description: body.description,
        enable_if: body.enable_if,
        alias: body.alias,
        dependency: body.dependency,
    })
}

/// Parse one target declaration from its raw bytes.
pub fn parse_target(path: &Path, bytes: &[u8]) -> Result<Target> {
    let parse_err = |message: String| Error::TargetParse {
        path: path.to_path_buf(),
        message,
    };

    let content = utf8(bytes).map_err(parse_err)?;
    let file: TargetFile = toml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
    let body = file.target;

    let mut tools = Vec::with_capacity(body.tools.len());
    for (role, value) in body.tools {
        let tool: ToolBody = value
            .try_into()
            .map_err(|e: toml::de::Error| parse_err(format!("tool `{role}`: {e}")))?;
        tools.push(Tool {
            name: role,
            cmd: tool.cmd,
            args: tool.args,
        });
    }

    Ok(Target {
        name: body.name,
        hash: compute_bytes_checksum(bytes),
        props: body.props,
        tools,
    })
}

/// Find every `manifest.toml` below `src_dir`, in a stable order.
///
/// Unreadable entries are logged and skipped. A missing directory yields no
/// files.
pub fn manifest_files(src_dir: &Path) -> Vec<PathBuf> {
    if !src_dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(src_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(path = ?e.path(), "Skipping unreadable source entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name() == BuildkitPath::ManifestFile.as_str())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// List the `*.toml` files directly inside `dir`, sorted by name.
///
/// A missing directory yields no files.
pub fn target_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| bk_fs::Error::io(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    Ok(files)
}

/// Read and parse every manifest below `src_dir`.
pub fn scan_manifests(src_dir: &Path) -> Result<Vec<Manifest>> {
    manifest_files(src_dir)
        .into_iter()
        .map(|path| {
            let bytes = io::read_bytes(&path)?;
            let manifest = parse_manifest(&path, &bytes)?;
            tracing::debug!(
                name = %manifest.name,
                kind = %manifest.kind,
                path = %path.display(),
                "Scanned manifest"
            );
            Ok(manifest)
        })
        .collect()
}

/// Read and parse every target declaration directly inside `dir`.
pub fn scan_targets(dir: &Path) -> Result<Vec<Target>> {
    target_files(dir)?
        .into_iter()
        .map(|path| {
            let bytes = io::read_bytes(&path)?;
            let target = parse_target(&path, &bytes)?;
            tracing::debug!(name = %target.name, path = %path.display(), "Scanned target");
            Ok(target)
        })
        .collect()
}

fn utf8(bytes: &[u8]) -> std::result::Result<&str, String> {
    std::str::from_utf8(bytes).map_err(|e| format!("not valid UTF-8: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ManifestKind, PropValue};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const HOST: &str = r#"
[target]
name = "host"

[target.props]
arch = "x86_64"
host = true

[target.tools.cc]
cmd = "gcc"
args = ["-Wall"]

[target.tools.ld]
cmd = "g++"

[target.tools.ar]
cmd = "ar"
args = ["rcs"]
"#;

    #[test]
    fn parse_target_keeps_tool_order_and_names() {
        let target = parse_target(Path::new("host.toml"), HOST.as_bytes()).unwrap();

        assert_eq!(target.name, "host");
        let roles: Vec<&str> = target.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(roles, vec!["cc", "ld", "ar"]);
        assert_eq!(target.tool("cc").unwrap().args, vec!["-Wall".to_string()]);
        assert!(target.tool("ld").unwrap().args.is_empty());
        assert_eq!(target.prop("host"), Some(&PropValue::Bool(true)));
        assert_eq!(target.hash, compute_bytes_checksum(HOST.as_bytes()));
    }

    #[test]
    fn parse_target_rejects_tool_without_cmd() {
        let src = "[target]\nname = \"t\"\n[target.tools.cc]\nargs = []\n";
        let err = parse_target(Path::new("t.toml"), src.as_bytes()).unwrap_err();
        match err {
            Error::TargetParse { message, .. } => assert!(message.contains("cc")),
            other => panic!("expected TargetParse, got {other:?}"),
        }
    }

    #[test]
    fn parse_target_without_target_table() {
        let err = parse_target(Path::new("t.toml"), b"name = \"t\"\n").unwrap_err();
        assert!(matches!(err, Error::TargetParse { .. }));
    }

    #[test]
    fn parse_manifest_injects_kind_hash_and_path() {
        let src = r#"[binary]
name = "app"
alias = "demo"

[binary.dependency]
name = "core"
version = "1.0"
"#;
        let path = Path::new("src/app/manifest.toml");
        let manifest = parse_manifest(path, src.as_bytes()).unwrap();

        assert_eq!(manifest.kind, ManifestKind::Binary);
        assert_eq!(manifest.name, "app");
        assert_eq!(manifest.path, path);
        assert_eq!(manifest.alias.as_deref(), Some("demo"));
        assert_eq!(manifest.hash, compute_bytes_checksum(src.as_bytes()));
        let dep = manifest.dependency.unwrap();
        assert_eq!(dep.name, "core");
        assert_eq!(dep.version.as_deref(), Some("1.0"));
        assert!(dep.git.is_none());
    }

    #[rstest]
    #[case::no_kind_table(b"[component]\nname = \"x\"\n")]
    #[case::two_kind_tables(b"[binary]\nname = \"a\"\n[library]\nname = \"b\"\n")]
    #[case::unknown_body_field(b"[plugin]\nname = \"p\"\nflavour = \"sweet\"\n")]
    #[case::missing_name(b"[library]\ndescription = \"nameless\"\n")]
    #[case::invalid_utf8(&[0xff, 0xfe])]
    #[case::broken_toml(b"[binary\nname = ")]
    fn malformed_manifest_is_a_parse_error(#[case] src: &[u8]) {
        let err = parse_manifest(Path::new("m.toml"), src).unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }), "got {err:?}");
    }

    #[test]
    fn target_files_of_missing_dir_is_empty() {
        assert!(target_files(Path::new("/nonexistent/buildkit/targets")).unwrap().is_empty());
    }

    #[test]
    fn manifest_files_of_missing_dir_is_empty() {
        assert!(manifest_files(Path::new("/nonexistent/buildkit/src")).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_source_dirs_are_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("app")).unwrap();
        fs::write(src.join("app/manifest.toml"), "[binary]\nname = \"app\"\n").unwrap();
        let locked = src.join("locked");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::write(locked.join("inner/manifest.toml"), "[binary]\nname = \"x\"\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // privileged users read through the permission bits
        let blocked = fs::read_dir(&locked).is_err();
        let found = manifest_files(&src);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if blocked {
            assert_eq!(found, vec![src.join("app/manifest.toml")]);
        } else {
            assert_eq!(found.len(), 2);
        }
    }
}
