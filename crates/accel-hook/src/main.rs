//! accelerator-runtime-hook - OCI prestart hook for accelerator containers.

use std::path::Path;
use std::process::ExitCode;

use accel_hook::commands::{self, Cli};
use accel_hook::{HookConfig, HookError, LoggingContext};
use accel_hook_constants::paths::LOG_FILE;
use clap::Parser;
use tracing::{debug, error};

fn main() -> ExitCode {
    // Usage errors exit with status 2 from here.
    let cli = Cli::parse_from(commands::normalize_flags(std::env::args_os()));

    if cli.command.is_noop() {
        return ExitCode::SUCCESS;
    }

    let resolved = HookConfig::resolve(cli.config.as_deref());
    let log_file = resolved
        .as_ref()
        .map_or(Path::new(LOG_FILE), |(c, _)| c.log_file.as_path());
    let logging = LoggingContext::init(log_file, cli.debug);

    let result = resolved.and_then(|(config, source)| {
        debug!(%source, tool = %config.tool, "hook configuration loaded");
        commands::prestart::execute(std::io::stdin().lock(), &config, &logging)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fatal(&e, &logging),
    }
}

/// Log a fatal error and turn it into the process exit status.
fn fatal(err: &HookError, logging: &LoggingContext) -> ExitCode {
    error!("{err}");
    if !logging.logs_to_stderr() {
        eprintln!("{err}");
    }
    ExitCode::from(err.exit_code())
}
