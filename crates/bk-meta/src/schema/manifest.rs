//! Manifest schema - one buildable or pluggable component
//!
//! Each `manifest.toml` under `src/` holds exactly one of the `binary`,
//! `library` or `plugin` tables; the table name becomes the
//! [`ManifestKind`].
//!
//! ```toml
//! [binary]
//! name = "app"
//! description = "Demo application"
//! alias = "demo"
//!
//! [binary.enableIf]
//! host = true
//!
//! [binary.dependency]
//! name = "core"
//! path = "../core"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Kind of component, taken from the enclosing table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    Plugin,
    Binary,
    Library,
}

impl ManifestKind {
    /// The top-level table name declaring this kind.
    pub fn table(&self) -> &'static str {
        match self {
            ManifestKind::Plugin => "plugin",
            ManifestKind::Binary => "binary",
            ManifestKind::Library => "library",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// Reference to another component, resolved by the build engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub git: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// A component declared somewhere under the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    #[serde(rename = "type")]
    pub kind: ManifestKind,
    /// Digest of the manifest file's raw bytes
    pub hash: String,
    pub name: String,
    /// Location of the `manifest.toml` this was read from
    pub path: PathBuf,
    pub description: Option<String>,
    #[serde(rename = "enableIf")]
    pub enable_if: Option<BTreeMap<String, bool>>,
    pub alias: Option<String>,
    pub dependency: Option<Dependency>,
}

#[derive(Deserialize)]
pub(crate) struct ManifestFile {
    pub binary: Option<ManifestBody>,
    pub library: Option<ManifestBody>,
    pub plugin: Option<ManifestBody>,
}

impl ManifestFile {
    /// All declared bodies with their kinds.
    pub fn into_bodies(self) -> Vec<(ManifestKind, ManifestBody)> {
        [
            (ManifestKind::Binary, self.binary),
            (ManifestKind::Library, self.library),
            (ManifestKind::Plugin, self.plugin),
        ]
        .into_iter()
        .filter_map(|(kind, body)| body.map(|b| (kind, b)))
        .collect()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ManifestBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "enableIf", alias = "enable_if")]
    pub enable_if: Option<BTreeMap<String, bool>>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub dependency: Option<Dependency>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_table_names() {
        assert_eq!(ManifestKind::Binary.to_string(), "binary");
        assert_eq!(ManifestKind::Library.table(), "library");
        assert_eq!(ManifestKind::Plugin.table(), "plugin");
    }

    #[test]
    fn body_accepts_camel_case_enable_if() {
        let file: ManifestFile =
            toml::from_str("[library]\nname = \"core\"\n[library.enableIf]\nhost = false\n")
                .unwrap();
        let bodies = file.into_bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].0, ManifestKind::Library);
        assert_eq!(
            bodies[0].1.enable_if.as_ref().and_then(|m| m.get("host")),
            Some(&false)
        );
    }

    #[test]
    fn body_rejects_unknown_fields() {
        let parsed: Result<ManifestFile, _> =
            toml::from_str("[binary]\nname = \"app\"\nflavour = \"sweet\"\n");
        assert!(parsed.is_err());
    }
}
