//! Config registry
//!
//! Process-lifetime cache of every declaration visible from the invocation
//! directory, keyed by name:
//!
//! - manifests, from `src/**/manifest.toml`
//! - targets, from the global target directory, then the project-local
//!   `meta/targets/` (later files overwrite earlier ones of the same name)
//! - projects, holding the active project or the `"No project"` placeholder
//!
//! The project is loaded when the registry is opened. Manifests and targets
//! start empty; the first failed lookup triggers a full [`Registry::load`]
//! and retries once. There is no incremental invalidation.

use crate::loader;
use crate::schema::{Manifest, Project, Target};
use crate::{Error, Result};
use bk_fs::Environment;
use std::collections::HashMap;

/// Everything registered under one name.
///
/// A name may denote a target and a component at the same time; callers
/// pick the field they need.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entry<'a> {
    pub manifest: Option<&'a Manifest>,
    pub project: Option<&'a Project>,
    pub target: Option<&'a Target>,
}

/// Name-keyed cache of projects, targets and manifests.
#[derive(Debug)]
pub struct Registry {
    env: Environment,
    manifests: HashMap<String, Manifest>,
    targets: HashMap<String, Target>,
    projects: HashMap<String, Project>,
    main_project: Option<String>,
}

impl Registry {
    /// Open a registry for `env`, loading the project eagerly.
    ///
    /// A missing or unreadable project marker is not an error here: the
    /// placeholder project is registered instead, so commands that do not
    /// need a project keep working.
    pub fn open(env: Environment) -> Self {
        let loaded = env
            .require_project()
            .map_err(Error::from)
            .and_then(|layout| loader::load_project(&layout));

        let (project, main_project) = match loaded {
            Ok(project) => {
                tracing::info!(name = %project.name, "Loaded project");
                let name = project.name.clone();
                (project, Some(name))
            }
            Err(e) => {
                tracing::warn!("No project loaded: {}", e);
                (Project::placeholder(), None)
            }
        };

        let mut projects = HashMap::new();
        projects.insert(project.name.clone(), project);

        Self {
            env,
            manifests: HashMap::new(),
            targets: HashMap::new(),
            projects,
            main_project,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Rescan the filesystem and repopulate manifests and targets.
    ///
    /// Entries already cached are overwritten by name; nothing is removed.
    pub fn load(&mut self) -> Result<()> {
        let layout = self.env.project();

        if let Some(layout) = &layout {
            for manifest in loader::scan_manifests(&layout.src_dir())? {
                self.manifests.insert(manifest.name.clone(), manifest);
            }
        }

        let mut target_dirs = vec![self.env.global.target_dir()];
        if let Some(layout) = &layout {
            target_dirs.push(layout.targets_dir());
        }
        for dir in target_dirs {
            for target in loader::scan_targets(&dir)? {
                self.targets.insert(target.name.clone(), target);
            }
        }

        tracing::debug!(
            manifests = self.manifests.len(),
            targets = self.targets.len(),
            "Registry loaded"
        );
        Ok(())
    }

    /// Everything currently cached under `name`. Never triggers a scan.
    pub fn get(&self, name: &str) -> Entry<'_> {
        Entry {
            manifest: self.manifests.get(name),
            project: self.projects.get(name),
            target: self.targets.get(name),
        }
    }

    /// Resolve a component, rescanning once on a cache miss.
    pub fn manifest(&mut self, name: &str) -> Result<&Manifest> {
        if !self.manifests.contains_key(name) {
            self.load()?;
        }
        let manifest = self
            .manifests
            .get(name)
            .ok_or_else(|| Error::ManifestNotFound {
                name: name.to_string(),
            })?;

        tracing::info!("Loaded manifest {}", manifest.name);
        tracing::debug!(
            hash = %manifest.hash,
            kind = %manifest.kind,
            path = %manifest.path.display(),
            description = ?manifest.description,
            enable_if = ?manifest.enable_if,
            alias = ?manifest.alias,
            dependency = ?manifest.dependency,
            "Manifest details"
        );
        Ok(manifest)
    }

    /// Resolve a target, rescanning once on a cache miss.
    pub fn target(&mut self, name: &str) -> Result<&Target> {
        if !self.targets.contains_key(name) {
            self.load()?;
        }
        let target = self
            .targets
            .get(name)
            .ok_or_else(|| Error::TargetNotFound {
                name: name.to_string(),
            })?;

        tracing::info!("Loaded target {}", target.name);
        tracing::debug!(hash = %target.hash, "Target details");
        for (key, value) in &target.props {
            tracing::debug!("  {}: {}", key, value);
        }
        for tool in &target.tools {
            tracing::debug!("  * {} cmd={} args={:?}", tool.name, tool.cmd, tool.args);
        }
        let missing = target.missing_tools();
        if !missing.is_empty() {
            tracing::warn!(name = %target.name, ?missing, "Target lacks conventional tools");
        }
        Ok(target)
    }

    pub fn manifests(&self) -> &HashMap<String, Manifest> {
        &self.manifests
    }

    pub fn targets(&self) -> &HashMap<String, Target> {
        &self.targets
    }

    pub fn projects(&self) -> &HashMap<String, Project> {
        &self.projects
    }

    /// The active project, or `None` outside a project tree.
    pub fn main_project(&self) -> Option<&Project> {
        self.main_project
            .as_deref()
            .and_then(|name| self.projects.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bk_test_utils::TestProject;

    #[test]
    fn open_without_project_registers_placeholder() {
        let fixture = TestProject::bare();
        let registry = Registry::open(fixture.env());

        assert!(registry.main_project().is_none());
        assert_eq!(registry.projects().len(), 1);
        assert!(registry.get("No project").project.is_some());
    }

    #[test]
    fn open_loads_project_eagerly() {
        let fixture = TestProject::new("kernel");
        let registry = Registry::open(fixture.env());

        assert_eq!(registry.main_project().map(|p| p.name.as_str()), Some("kernel"));
        assert!(registry.manifests().is_empty());
        assert!(registry.targets().is_empty());
    }

    #[test]
    fn lookup_miss_triggers_full_load() {
        let fixture = TestProject::new("kernel");
        fixture.binary("app", "app");
        fixture.library("libs/core", "core");
        fixture.global_target("host");

        let mut registry = Registry::open(fixture.env());
        assert!(registry.get("app").manifest.is_none());

        assert_eq!(registry.manifest("app").unwrap().name, "app");
        // the miss loaded everything, not just the requested entry
        assert!(registry.get("core").manifest.is_some());
        assert!(registry.get("host").target.is_some());
    }

    #[test]
    fn unknown_names_fail_after_rescan() {
        let fixture = TestProject::new("kernel");
        let mut registry = Registry::open(fixture.env());

        assert!(matches!(
            registry.manifest("ghost"),
            Err(Error::ManifestNotFound { .. })
        ));
        assert!(matches!(
            registry.target("ghost"),
            Err(Error::TargetNotFound { .. })
        ));
    }

    #[test]
    fn project_local_target_overrides_global() {
        let fixture = TestProject::new("kernel");
        fixture.global_target("host");
        fixture.write(
            "meta/targets/host.toml",
            "[target]\nname = \"host\"\n[target.props]\nlocal = true\n",
        );

        let mut registry = Registry::open(fixture.env());
        let target = registry.target("host").unwrap();
        assert_eq!(
            target.prop("local"),
            Some(&crate::PropValue::Bool(true))
        );
    }

    #[test]
    fn global_targets_load_outside_a_project() {
        let fixture = TestProject::bare();
        fixture.global_target("host");

        let mut registry = Registry::open(fixture.env());
        assert_eq!(registry.target("host").unwrap().name, "host");
    }

    #[test]
    fn name_can_denote_target_and_component() {
        let fixture = TestProject::new("kernel");
        fixture.binary("host", "host");
        fixture.global_target("host");

        let mut registry = Registry::open(fixture.env());
        registry.load().unwrap();

        let entry = registry.get("host");
        assert!(entry.manifest.is_some());
        assert!(entry.target.is_some());
        assert!(entry.project.is_none());
    }
}
