//! `build` command

use crate::args::BoundArgs;
use crate::command::Context;
use crate::error::{CliError, Result};
use crate::generator::BuildRequest;
use bk_fs::io;

/// Target used when `--target` is omitted.
pub const DEFAULT_TARGET: &str = "host";

/// Resolve the target and component, then hand them to the generator.
pub fn run(ctx: &mut Context<'_>, args: &BoundArgs) -> Result<()> {
    let component = args.str("component").ok_or(CliError::NoComponentSpecified)?;
    let target_name = args.str("target").unwrap_or(DEFAULT_TARGET);
    let layout = ctx.env().require_project()?;

    let target = ctx.registry.target(target_name)?.clone();
    let manifest = ctx.registry.manifest(component)?.clone();

    let build_dir = layout.build_dir();
    if !build_dir.exists() {
        io::ensure_dir(&build_dir)?;
    }

    ctx.generator.generate(&BuildRequest {
        project_root: layout.root(),
        build_dir: &build_dir,
        target: &target,
        manifest: &manifest,
    })?;

    writeln!(
        ctx.out,
        "Generated build graph for {} ({})",
        manifest.name, target.name
    )?;
    Ok(())
}
