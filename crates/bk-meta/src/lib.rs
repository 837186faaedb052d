//! Declarations and the config registry for buildkit.
//!
//! This crate parses the three kinds of TOML declarations found in a
//! project (the project marker, target profiles and component manifests)
//! and caches them by name in a [`Registry`].

pub mod error;
pub mod host;
pub mod loader;
pub mod registry;
pub mod schema;

pub use error::{Error, Result};
pub use host::ensure_host_target;
pub use registry::{Entry, Registry};
pub use schema::{Dependency, Manifest, ManifestKind, Project, PropValue, Target, Tool};
