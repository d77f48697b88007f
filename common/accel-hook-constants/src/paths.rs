/// Default hook log file, also handed to the delegate tool.
pub const LOG_FILE: &str = "/var/log/accelerator-runtime-hook.log";

/// Optional hook configuration file read when `--config` is not given.
pub const CONFIG_FILE: &str = "/etc/accelerator-runtime-hook.toml";

/// OCI runtime configuration file name inside a bundle.
pub const BUNDLE_CONFIG: &str = "config.json";
