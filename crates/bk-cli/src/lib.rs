//! buildkit command-line core
//!
//! Tokenizes arguments, binds them to the selected command's declarations
//! and runs the command against the config registry.

pub mod args;
pub mod command;
pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod logging;
pub mod style;

pub use command::{Command, CommandRegistry, Context, Origin};
pub use dispatcher::App;
pub use error::{CliError, Result};
pub use generator::{BuildGraphGenerator, BuildRequest, PlanWriter};
