//! Project schema - loaded from `buildkit.toml`
//!
//! ```toml
//! [project]
//! name = "kernel"
//! description = "A hobby kernel"
//! ```

use serde::{Deserialize, Serialize};

/// Name of the placeholder project used outside any project tree.
pub const NO_PROJECT: &str = "No project";

/// The active project of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct ProjectFile {
    project: Project,
}

impl Project {
    /// Stand-in used when no project could be loaded.
    pub fn placeholder() -> Self {
        Self {
            name: NO_PROJECT.to_string(),
            description: Some("No project was found".to_string()),
        }
    }

    /// Parse the contents of a project marker file.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<ProjectFile>(content).map(|file| file.project)
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == NO_PROJECT
    }
}
