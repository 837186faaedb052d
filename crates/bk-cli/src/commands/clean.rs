//! `clean` and `nuke` commands

use crate::args::BoundArgs;
use crate::command::Context;
use crate::error::{CliError, Result};
use bk_fs::io;

/// Remove the project's build output directory.
pub fn run_clean(ctx: &mut Context<'_>, _: &BoundArgs) -> Result<()> {
    let layout = ctx.env().require_project()?;
    let build_dir = layout.build_dir();
    if !build_dir.is_dir() {
        return Err(CliError::BuildDirNotFound { path: build_dir });
    }

    io::remove_tree(&build_dir)?;
    tracing::info!(path = %build_dir.display(), "Cleaned build directory");
    writeln!(ctx.out, "Removed {}", build_dir.display())?;
    Ok(())
}

/// Remove the project's whole state directory.
pub fn run_nuke(ctx: &mut Context<'_>, _: &BoundArgs) -> Result<()> {
    let layout = ctx.env().require_project()?;
    let state_dir = layout.state_dir();
    if !state_dir.is_dir() {
        return Err(CliError::StateDirNotFound { path: state_dir });
    }

    io::remove_tree(&state_dir)?;
    tracing::info!(path = %state_dir.display(), "Removed state directory");
    writeln!(ctx.out, "Removed {}", state_dir.display())?;
    Ok(())
}
