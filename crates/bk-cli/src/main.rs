//! buildkit CLI
//!
//! A build system and package manager for low-level software development.

use colored::Colorize;
use std::process::ExitCode;

use bk_cli::App;
use bk_cli::dispatcher::wants_verbose;
use bk_cli::logging;
use bk_fs::Environment;
use bk_meta::ensure_host_target;

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();

    let env = match Environment::from_process() {
        Ok(env) => env,
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
            return ExitCode::SUCCESS;
        }
    };

    // must run before logging creates the state directory
    let host = ensure_host_target(&env.global);

    if let Err(e) = logging::init(wants_verbose(&argv), &env.global.log_file()) {
        eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    match host {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "First run, host target created"),
        Ok(None) => {}
        Err(e) => tracing::warn!("Could not generate host target: {}", e),
    }

    let mut app = App::new(env);
    let mut stdout = std::io::stdout().lock();
    ExitCode::from(app.main(&argv, &mut stdout))
}
