//! Command registry
//!
//! Holds every command the dispatcher can run. Built-in commands are
//! registered by [`crate::commands::register_builtins`]; anything else is
//! registered as a plugin with the name of the module that supplied it.
//! Provenance only affects how `help` displays a command.

use crate::args::{ArgSpec, BoundArgs};
use crate::error::{CliError, Result};
use crate::generator::BuildGraphGenerator;
use bk_fs::Environment;
use bk_meta::Registry;
use std::fmt;
use std::io::Write;

/// Where a command was registered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Builtin,
    /// Supplied from outside the built-in command set
    Plugin(String),
}

impl Origin {
    pub fn is_plugin(&self) -> bool {
        matches!(self, Origin::Plugin(_))
    }
}

/// Everything a command handler may consult while running.
pub struct Context<'a> {
    pub commands: &'a CommandRegistry,
    pub registry: &'a mut Registry,
    pub generator: &'a dyn BuildGraphGenerator,
    pub out: &'a mut dyn Write,
}

impl Context<'_> {
    pub fn env(&self) -> &Environment {
        self.registry.env()
    }
}

/// Callback invoked with the bound arguments of a command.
pub type Handler = Box<dyn Fn(&mut Context<'_>, &BoundArgs) -> Result<()>>;

/// A registered command.
pub struct Command {
    pub short_name: String,
    pub long_name: String,
    pub description: String,
    pub origin: Origin,
    handler: Handler,
    args: Vec<ArgSpec>,
}

impl Command {
    /// Attach an argument declaration.
    pub fn arg(&mut self, spec: ArgSpec) -> &mut Self {
        self.args.push(spec);
        self
    }

    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    pub fn is_plugin(&self) -> bool {
        self.origin.is_plugin()
    }

    pub fn run(&self, ctx: &mut Context<'_>, args: &BoundArgs) -> Result<()> {
        (self.handler)(ctx, args)
    }

    /// One-line usage: required arguments in `<>`, the rest in `[]`.
    pub fn usage(&self, program: &str) -> String {
        let mut line = format!("Usage: {} {}", program, self.long_name);
        for arg in &self.args {
            let short = arg
                .short_name
                .as_deref()
                .map(|s| format!(" | -{s}"))
                .unwrap_or_default();
            let ty = match arg.ty {
                crate::args::ArgType::Bool => String::new(),
                other => format!(" {other}"),
            };
            let body = format!("--{}{}{}", arg.name, short, ty);
            if arg.is_required() {
                line.push_str(&format!(" <{body}>"));
            } else {
                line.push_str(&format!(" [{body}]"));
            }
        }
        line
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("origin", &self.origin)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Ordered set of known commands, looked up by short or long name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in commands.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::commands::register_builtins(&mut registry);
        registry
    }

    /// Register a command and return it so arguments can be attached.
    pub fn register<F>(
        &mut self,
        short_name: &str,
        long_name: &str,
        description: &str,
        origin: Origin,
        handler: F,
    ) -> &mut Command
    where
        F: Fn(&mut Context<'_>, &BoundArgs) -> Result<()> + 'static,
    {
        tracing::trace!(name = long_name, ?origin, "Registering command");
        self.commands.push(Command {
            short_name: short_name.to_string(),
            long_name: long_name.to_string(),
            description: description.to_string(),
            origin,
            handler: Box::new(handler),
            args: Vec::new(),
        });
        let last = self.commands.len() - 1;
        &mut self.commands[last]
    }

    /// Register a command supplied by `source`.
    pub fn register_plugin<F>(
        &mut self,
        source: &str,
        short_name: &str,
        long_name: &str,
        description: &str,
        handler: F,
    ) -> &mut Command
    where
        F: Fn(&mut Context<'_>, &BoundArgs) -> Result<()> + 'static,
    {
        self.register(
            short_name,
            long_name,
            description,
            Origin::Plugin(source.to_string()),
            handler,
        )
    }

    /// Look up a command by short or long name.
    ///
    /// The first registered match wins.
    pub fn get(&self, name: &str) -> Result<&Command> {
        self.commands
            .iter()
            .find(|c| c.short_name == name || c.long_name == name)
            .ok_or_else(|| CliError::UnknownCommand {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
