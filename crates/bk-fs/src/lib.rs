//! Filesystem layer for buildkit
//!
//! Locates the project root, derives the canonical project and user-level
//! directories, and provides content digests and atomic writes.

pub mod checksum;
pub mod constants;
pub mod environment;
pub mod error;
pub mod io;
pub mod layout;

pub use checksum::compute_bytes_checksum;
pub use constants::BuildkitPath;
pub use environment::Environment;
pub use error::{Error, Result};
pub use layout::{GlobalLayout, ProjectLayout, chdir, find_root, find_root_from};
