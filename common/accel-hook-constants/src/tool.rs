/// Default delegate executable, located through `PATH`.
pub const TOOL_NAME: &str = "accelerator-container-runtime-tool";

/// Trailing command token understood by the delegate tool.
pub const CONFIGURE_COMMAND: &str = "configure";

/// Syslog-style level passed as `--loglevel` when the hook runs with `--debug`.
pub const LOG_LEVEL_DEBUG: u8 = 7;

/// Syslog-style level passed as `--loglevel` otherwise.
pub const LOG_LEVEL_INFO: u8 = 6;
