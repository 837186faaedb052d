//! `version` command

use crate::args::BoundArgs;
use crate::command::Context;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run(ctx: &mut Context<'_>, _: &BoundArgs) -> Result<()> {
    writeln!(ctx.out, "{} {}", super::PROGRAM, VERSION)?;
    Ok(())
}
