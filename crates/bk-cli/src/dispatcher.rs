//! Top-level dispatch
//!
//! `argv[1]` names the command (default `help`), the remaining tokens are
//! parsed and bound against that command's arguments, and the handler runs.
//! This is the only recovery point: any error is logged in full, reported
//! as one line, and the process still exits with status 0.

use colored::Colorize;

use crate::args;
use crate::command::{CommandRegistry, Context};
use crate::error::Result;
use crate::generator::{BuildGraphGenerator, PlanWriter};
use bk_fs::Environment;
use bk_meta::Registry;
use std::io::Write;

/// Command used when none is given.
pub const DEFAULT_COMMAND: &str = "help";

/// A command registry, config registry and generator wired together.
pub struct App {
    commands: CommandRegistry,
    registry: Registry,
    generator: Box<dyn BuildGraphGenerator>,
}

impl App {
    /// Built-in commands, a registry opened on `env`, and the plan writer.
    pub fn new(env: Environment) -> Self {
        Self {
            commands: CommandRegistry::with_builtins(),
            registry: Registry::open(env),
            generator: Box::new(PlanWriter),
        }
    }

    /// Replace the build-graph generator.
    pub fn with_generator(mut self, generator: impl BuildGraphGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Register additional (plugin) commands here.
    pub fn commands_mut(&mut self) -> &mut CommandRegistry {
        &mut self.commands
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve, bind and run the command named by `argv`, propagating errors.
    pub fn dispatch<S: AsRef<str>>(&mut self, argv: &[S], out: &mut dyn Write) -> Result<()> {
        let name = argv.get(1).map_or(DEFAULT_COMMAND, AsRef::<str>::as_ref);
        let tokens = argv.iter().skip(2).map(AsRef::<str>::as_ref);

        let command = self.commands.get(name)?;
        let raw = args::parse(tokens)?;
        let bound = args::bind(raw, command.args())?;
        tracing::debug!(command = %command.long_name, args = ?bound, "Dispatching");

        let mut ctx = Context {
            commands: &self.commands,
            registry: &mut self.registry,
            generator: &*self.generator,
            out,
        };
        command.run(&mut ctx, &bound)
    }

    /// Run `argv` and report any failure to `out`.
    ///
    /// Always returns exit status 0.
    pub fn main<S: AsRef<str>>(&mut self, argv: &[S], out: &mut dyn Write) -> u8 {
        if let Err(e) = self.dispatch(argv, out) {
            let name = argv.get(1).map_or(DEFAULT_COMMAND, AsRef::<str>::as_ref);
            tracing::error!(command = name, error = ?e, "Command failed: {}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                tracing::error!("  caused by: {}", cause);
                source = cause.source();
            }
            // nothing left to report to if stdout itself is gone
            let _ = writeln!(out, "{} {}", "Error:".red().bold(), e);
        }
        0
    }
}

/// Whether the raw arguments ask for verbose (stderr) logging.
///
/// Unparsable arguments are reported later by dispatch.
pub fn wants_verbose<S: AsRef<str>>(argv: &[S]) -> bool {
    args::parse(argv.iter().skip(2).map(AsRef::<str>::as_ref))
        .map(|raw| raw.contains("verbose"))
        .unwrap_or(false)
}
