//! Boundary to the build-graph generator
//!
//! `build` resolves a target and a component and hands both over here. What
//! the generator produces is its own business; the default [`PlanWriter`]
//! records the resolved pair as a JSON plan in the build directory for the
//! downstream engine to pick up.

use crate::error::{CliError, Result};
use bk_fs::io;
use bk_meta::{Manifest, Target};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything the generator receives for one build.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildRequest<'a> {
    pub project_root: &'a Path,
    pub build_dir: &'a Path,
    pub target: &'a Target,
    pub manifest: &'a Manifest,
}

/// Consumer of resolved build requests.
pub trait BuildGraphGenerator {
    fn generate(&self, request: &BuildRequest<'_>) -> Result<()>;
}

/// Writes `<build_dir>/<component>-<target>.plan.json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanWriter;

impl PlanWriter {
    pub fn plan_path(request: &BuildRequest<'_>) -> PathBuf {
        request.build_dir.join(format!(
            "{}-{}.plan.json",
            request.manifest.name, request.target.name
        ))
    }
}

impl BuildGraphGenerator for PlanWriter {
    fn generate(&self, request: &BuildRequest<'_>) -> Result<()> {
        let plan = serde_json::to_string_pretty(request).map_err(|e| CliError::Generator {
            message: e.to_string(),
        })?;
        let path = Self::plan_path(request);
        io::write_text(&path, &plan)?;
        tracing::info!(path = %path.display(), "Wrote build plan");
        Ok(())
    }
}
