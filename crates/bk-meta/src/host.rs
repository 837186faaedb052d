//! First-run host target generation
//!
//! When the user-level state directory does not exist yet, a `host` target
//! describing the current machine is written into its `target/` directory,
//! so `build --target host` works without any setup.

use bk_fs::{GlobalLayout, io};
use std::path::PathBuf;

use crate::Result;

/// Name of the generated target.
pub const HOST_TARGET: &str = "host";

/// Render the host target declaration for the running machine.
pub fn host_target_toml() -> String {
    let endian = if cfg!(target_endian = "big") {
        "big"
    } else {
        "little"
    };

    format!(
        r#"[target]
name = "{HOST_TARGET}"

[target.props]
arch = "{arch}"
sys = "{sys}"
host = true
freestanding = false
endian = "{endian}"

[target.tools.cc]
cmd = "gcc"
args = ["-Wall", "-Wextra", "-Werror", "-std=c2x"]

[target.tools.cxx]
cmd = "g++"
args = ["-Wall", "-Wextra", "-Werror", "-fno-exceptions", "-fno-rtti", "-std=c++2b"]

[target.tools.ld]
cmd = "g++"
args = []

[target.tools.ar]
cmd = "ar"
args = ["rcs"]

[target.tools.as]
cmd = "as"
args = []
"#,
        arch = std::env::consts::ARCH,
        sys = std::env::consts::OS,
    )
}

/// Generate the host target if the user-level state directory is missing.
///
/// Returns the written path, or `None` when the state directory already
/// existed and nothing was touched.
pub fn ensure_host_target(global: &GlobalLayout) -> Result<Option<PathBuf>> {
    if global.state_dir().exists() {
        return Ok(None);
    }

    let path = global.target_dir().join(format!("{HOST_TARGET}.toml"));
    io::write_text(&path, &host_target_toml())?;
    tracing::info!(path = %path.display(), "Generated host target");
    Ok(Some(path))
}
