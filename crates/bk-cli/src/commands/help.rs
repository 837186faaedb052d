//! `help` command

use colored::Colorize;

use crate::args::BoundArgs;
use crate::command::{Command, CommandRegistry, Context};
use crate::error::Result;
use crate::style;
use std::io::Write;
use std::path::Path;

/// Print the command overview, or the usage of one command.
pub fn run(ctx: &mut Context<'_>, args: &BoundArgs) -> Result<()> {
    match args.str("command") {
        Some(name) => {
            let command = ctx.commands.get(name)?;
            command_help(ctx.out, command)?;
        }
        None => {
            let log_file = ctx.env().global.log_file();
            overview(ctx.out, ctx.commands, &log_file)?;
        }
    }
    Ok(())
}

fn command_help(out: &mut dyn Write, command: &Command) -> std::io::Result<()> {
    writeln!(out, "{}", command.usage(super::PROGRAM))?;
    writeln!(out)?;

    style::title(out, "Description")?;
    let plugin = if command.is_plugin() {
        " This is a plugin command"
    } else {
        ""
    };
    writeln!(out, "{}", style::indent(&format!("{}{}", command.description, plugin)))?;
    writeln!(out)?;

    style::title(out, "Arguments")?;
    if command.args().is_empty() {
        writeln!(out, "{}", style::indent("No arguments"))?;
    }
    for arg in command.args() {
        let note = match (&arg.default, arg.optional) {
            (Some(default), _) => format!(" {}", format!("(default: {default})").cyan()),
            (None, true) => format!(" {}", "(optional)".cyan()),
            (None, false) => String::new(),
        };
        let short = arg.short_name.as_deref().unwrap_or(" ");
        writeln!(
            out,
            "{}",
            style::indent(&format!(
                "{}  --{:<20} {}{}",
                format!("-{short}").green(),
                arg.name,
                arg.description,
                note
            ))
        )?;
    }
    Ok(())
}

fn overview(
    out: &mut dyn Write,
    commands: &CommandRegistry,
    log_file: &Path,
) -> std::io::Result<()> {
    writeln!(out, "Usage: {} <command> [args...]", super::PROGRAM)?;
    writeln!(out)?;

    style::title(out, "Description")?;
    writeln!(
        out,
        "{}",
        style::indent("A build system and package manager for low-level software development")
    )?;
    writeln!(out)?;

    style::title(out, "Commands")?;
    for command in commands.iter() {
        let plugin = if command.is_plugin() {
            format!(" {}", "(plugin)".cyan())
        } else {
            String::new()
        };
        writeln!(
            out,
            "{}",
            style::indent(&format!(
                "{}  {:<20} {}{}",
                command.short_name.green(),
                command.long_name,
                command.description,
                plugin
            ))
        )?;
    }
    writeln!(out)?;

    style::title(out, "Logging")?;
    writeln!(out, "{}", style::indent("Logs are stored in:"))?;
    writeln!(out, "{}", style::indent(&format!(" - {}", log_file.display())))?;
    Ok(())
}
