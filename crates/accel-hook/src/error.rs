//! Error type for the hook.

use std::path::PathBuf;

use accel_hook_oci::OciError;
use thiserror::Error;

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

/// Exit status for failures without a more specific code.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when the delegate tool cannot be located.
pub const EXIT_NOT_FOUND: u8 = 127;

/// Exit status when the delegate tool was found but could not be executed.
pub const EXIT_CANNOT_EXECUTE: u8 = 126;

/// Every way a hook invocation can fail.
///
/// None of these are retried. The top-level handler logs the error and
/// exits with [`HookError::exit_code`].
#[derive(Debug, Error)]
pub enum HookError {
    /// Hook state, bundle spec or process environment was unusable.
    #[error(transparent)]
    Oci(#[from] OciError),

    /// Hook configuration file problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Delegate tool is not on the search path.
    #[error("exec failed: {tool} not found: {source}")]
    ToolNotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    /// Root filesystem path could not be made absolute.
    #[error("rootfs invalid: {path}: {source}")]
    Rootfs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Replacing the process image (or spawning the tool) failed.
    #[error("exec failed: {path}: {source}")]
    Handoff {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit status for this error. Always non-zero.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ToolNotFound { .. } => EXIT_NOT_FOUND,
            Self::Handoff { .. } => EXIT_CANNOT_EXECUTE,
            Self::Oci(_) | Self::Config(_) | Self::Rootfs { .. } => EXIT_FAILURE,
        }
    }
}
