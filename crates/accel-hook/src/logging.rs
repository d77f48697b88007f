//! Process-wide logging set up once at startup.
//!
//! Records are plain text lines with a `dd-mm-YYYY HH:MM:SS` local timestamp,
//! appended to the hook log file. When the file cannot be opened the hook
//! logs to stderr instead and carries on.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use accel_hook_constants::tool::{LOG_LEVEL_DEBUG, LOG_LEVEL_INFO};
use tracing::error;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// The configured log file.
    File,
    /// Standard error, after the log file could not be opened.
    Stderr,
}

/// Logging settings in effect for this invocation.
///
/// Passed to the dispatcher so the delegate tool logs to the same place at
/// the same verbosity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingContext {
    /// Configured log file, whether or not it could be opened.
    pub log_file: PathBuf,
    /// Debug verbosity requested on the command line.
    pub debug: bool,
    /// Sink actually in use.
    pub sink: LogSink,
}

impl LoggingContext {
    /// Install the global subscriber. Call once, before any logging.
    pub fn init(log_file: &Path, debug: bool) -> Self {
        let filter = if debug { "debug" } else { "info" };
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

        let opened = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file);

        let sink = match opened {
            Ok(file) => {
                let _ = tracing_subscriber::registry()
                    .with(EnvFilter::new(filter))
                    .with(layer.with_writer(Mutex::new(file)))
                    .try_init();
                LogSink::File
            }
            Err(e) => {
                let _ = tracing_subscriber::registry()
                    .with(EnvFilter::new(filter))
                    .with(layer.with_writer(std::io::stderr))
                    .try_init();
                error!("Log to file failed: {}: {e}", log_file.display());
                LogSink::Stderr
            }
        };

        Self {
            log_file: log_file.to_path_buf(),
            debug,
            sink,
        }
    }

    /// Syslog-style level for the delegate's `--loglevel`.
    #[must_use]
    pub const fn tool_log_level(&self) -> u8 {
        if self.debug {
            LOG_LEVEL_DEBUG
        } else {
            LOG_LEVEL_INFO
        }
    }

    /// Whether records already reach stderr.
    #[must_use]
    pub fn logs_to_stderr(&self) -> bool {
        self.sink == LogSink::Stderr
    }
}
