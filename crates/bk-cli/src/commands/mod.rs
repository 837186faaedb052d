//! Built-in commands

pub mod build;
pub mod clean;
pub mod help;
pub mod list;
pub mod version;

use crate::args::{ArgSpec, ArgType};
use crate::command::{CommandRegistry, Origin};

/// Name used in usage lines.
pub const PROGRAM: &str = "buildkit";

/// Register every built-in command, in display order.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry
        .register("b", "build", "Build a component", Origin::Builtin, build::run)
        .arg(
            ArgSpec::new("target", ArgType::Str, "Target to build for")
                .short("t")
                .default_value(build::DEFAULT_TARGET),
        )
        .arg(
            ArgSpec::new("component", ArgType::Str, "Component to build")
                .short("c")
                .checked_by_handler(),
        );
    registry.register("l", "list", "List all components", Origin::Builtin, list::run);
    registry.register(
        "c",
        "clean",
        "Clean the build directory",
        Origin::Builtin,
        clean::run_clean,
    );
    registry.register(
        "n",
        "nuke",
        "Clean the buildkit directory",
        Origin::Builtin,
        clean::run_nuke,
    );
    registry.register("v", "version", "Print the version", Origin::Builtin, version::run);
    registry
        .register("h", "help", "Print this help message", Origin::Builtin, help::run)
        .arg(
            ArgSpec::new("command", ArgType::Str, "Command you want to get help for")
                .short("c")
                .optional(),
        );
}
