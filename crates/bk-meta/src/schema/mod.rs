//! Typed declarations
//!
//! - `buildkit.toml` - [`Project`]
//! - `meta/targets/*.toml`, `~/.buildkit/target/*.toml` - [`Target`]
//! - `src/**/manifest.toml` - [`Manifest`]
//!
//! Digests, paths and manifest kinds are injected by the loader; they never
//! appear in the files themselves.

pub mod manifest;
pub mod project;
pub mod target;

pub use manifest::{Dependency, Manifest, ManifestKind};
pub use project::Project;
pub use target::{PropValue, Target, Tool};
