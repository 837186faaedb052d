//! Log sink setup
//!
//! Verbose runs log to stderr. Everything else logs to the fixed log file in
//! the user-level state directory, truncated on every invocation. `RUST_LOG`
//! overrides the default `debug` filter in both cases.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn filter() -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("debug"))?)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbose: bool, log_file: &Path) -> InitResult {
    if verbose {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .compact();

        tracing_subscriber::registry()
            .with(filter()?)
            .with(fmt_layer)
            .try_init()?;
    } else {
        if let Some(parent) = log_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(log_file)?;
        let fmt_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(filter()?)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
