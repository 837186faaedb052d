//! Target schema - a named toolchain profile
//!
//! # Example TOML
//!
//! ```toml
//! [target]
//! name = "aarch64-none"
//!
//! [target.props]
//! arch = "aarch64"
//! freestanding = true
//! page_size = 4096
//!
//! [target.tools.cc]
//! cmd = "aarch64-none-elf-gcc"
//! args = ["-ffreestanding"]
//! ```
//!
//! Each `tools` sub-table becomes a [`Tool`] named by its key, in file order.
//! The build engine expects the `cc`, `cxx`, `ld`, `ar` and `as` roles, but
//! their absence is only noticed when a consumer asks for one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tool roles the build engine conventionally needs.
pub const REQUIRED_TOOLS: [&str; 5] = ["cc", "cxx", "ld", "ar", "as"];

/// One toolchain executable role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub name: String,
    pub cmd: String,
    pub args: Vec<String>,
}

/// Scalar value of a target property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Int(i) => write!(f, "{i}"),
            PropValue::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A toolchain profile selectable at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub name: String,
    /// Digest of the defining file's raw bytes
    pub hash: String,
    pub props: BTreeMap<String, PropValue>,
    pub tools: Vec<Tool>,
}

impl Target {
    /// Look up a tool by role.
    pub fn tool(&self, role: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == role)
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// Conventional roles this target does not provide.
    pub fn missing_tools(&self) -> Vec<&'static str> {
        REQUIRED_TOOLS
            .iter()
            .copied()
            .filter(|role| self.tool(role).is_none())
            .collect()
    }
}

#[derive(Deserialize)]
pub(crate) struct TargetFile {
    pub target: TargetBody,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TargetBody {
    pub name: String,
    #[serde(default)]
    pub props: BTreeMap<String, PropValue>,
    #[serde(default)]
    pub tools: toml::Table,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ToolBody {
    pub cmd: String,
    #[serde(default)]
    pub args: Vec<String>,
}
