//! `list` command

use colored::Colorize;

use crate::args::BoundArgs;
use crate::command::Context;
use crate::error::Result;
use crate::style;
use bk_meta::ManifestKind;

/// Rescan the project and print its binaries and libraries.
pub fn run(ctx: &mut Context<'_>, _: &BoundArgs) -> Result<()> {
    ctx.env().require_project()?;
    ctx.registry.load()?;

    let mut binaries = Vec::new();
    let mut libraries = Vec::new();
    for manifest in ctx.registry.manifests().values() {
        match manifest.kind {
            ManifestKind::Binary => binaries.push(manifest.name.as_str()),
            ManifestKind::Library => libraries.push(manifest.name.as_str()),
            ManifestKind::Plugin => {}
        }
    }
    binaries.sort_unstable();
    libraries.sort_unstable();

    section(ctx.out, "Binaries", &binaries, "No binaries found")?;
    writeln!(ctx.out)?;
    section(ctx.out, "Libraries", &libraries, "No libraries found")?;
    Ok(())
}

fn section(
    out: &mut dyn std::io::Write,
    title: &str,
    names: &[&str],
    empty: &str,
) -> std::io::Result<()> {
    style::title(out, &title.cyan().to_string())?;
    if names.is_empty() {
        writeln!(out, "{}", style::indent(empty))
    } else {
        writeln!(out, "{}", style::indent(&names.join(", ")))
    }
}
