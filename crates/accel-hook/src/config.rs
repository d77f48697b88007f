//! Hook configuration (maps to `/etc/accelerator-runtime-hook.toml`).

use std::path::{Path, PathBuf};

use accel_hook_constants::{paths, tool};
use serde::Deserialize;

use crate::error::{HookError, Result};

/// Settings that are fixed for a host rather than per container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Delegate executable name or path, resolved through `PATH`.
    pub tool: String,
    /// Hook log file, also handed to the delegate as `--log`.
    pub log_file: PathBuf,
}

/// Where the configuration in effect was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File named on the command line.
    Explicit(PathBuf),
    /// File at the default location.
    DefaultFile,
    /// No file; built-in defaults.
    BuiltIn,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::DefaultFile => f.write_str(paths::CONFIG_FILE),
            Self::BuiltIn => f.write_str("built-in defaults"),
        }
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            tool: tool::TOOL_NAME.into(),
            log_file: paths::LOG_FILE.into(),
        }
    }
}

impl HookConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HookError::config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| HookError::config(format!("{}: {e}", path.display())))
    }

    /// Resolve the configuration for this invocation.
    ///
    /// An explicit path must exist. Without one, the default location is read
    /// if present and the built-in defaults are used otherwise. Runs before
    /// logging is set up, so the caller logs the returned source.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Self::from_file(path).map(|c| (c, ConfigSource::Explicit(path.to_path_buf())));
        }
        let default_path = Path::new(paths::CONFIG_FILE);
        if default_path.exists() {
            Self::from_file(default_path).map(|c| (c, ConfigSource::DefaultFile))
        } else {
            Ok((Self::default(), ConfigSource::BuiltIn))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HookConfig::default();
        assert_eq!(config.tool, "accelerator-container-runtime-tool");
        assert_eq!(
            config.log_file,
            PathBuf::from("/var/log/accelerator-runtime-hook.log")
        );
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hook.toml");
        std::fs::write(&path, "tool = \"/opt/accel/bin/accel-tool\"\n").unwrap();

        let config = HookConfig::from_file(&path).unwrap();
        assert_eq!(config.tool, "/opt/accel/bin/accel-tool");
        assert_eq!(config.log_file, HookConfig::default().log_file);
    }

    #[test]
    fn test_from_file_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hook.toml");
        std::fs::write(&path, "tool = \"accel\"\nlog_file = \"/tmp/hook.log\"\n").unwrap();

        let config = HookConfig::from_file(&path).unwrap();
        assert_eq!(config.tool, "accel");
        assert_eq!(config.log_file, PathBuf::from("/tmp/hook.log"));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hook.toml");
        std::fs::write(&path, "tool = [unterminated").unwrap();

        let err = HookConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, HookError::Config(_)));
    }

    #[test]
    fn test_resolve_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = HookConfig::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, HookError::Config(ref msg) if msg.contains("absent.toml")));
    }

    #[test]
    fn test_resolve_explicit_reports_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hook.toml");
        std::fs::write(&path, "tool = \"accel\"\n").unwrap();

        let (config, source) = HookConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.tool, "accel");
        assert_eq!(source, ConfigSource::Explicit(path.clone()));
        assert_eq!(source.to_string(), path.display().to_string());
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            ConfigSource::DefaultFile.to_string(),
            "/etc/accelerator-runtime-hook.toml"
        );
        assert_eq!(ConfigSource::BuiltIn.to_string(), "built-in defaults");
    }
}
