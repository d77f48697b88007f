//! Prestart command implementation.

use std::io::Read;

use crate::config::HookConfig;
use crate::container::ContainerConfig;
use crate::dispatch::dispatch;
use crate::error::Result;
use crate::logging::LoggingContext;

/// Executes the prestart hook.
///
/// Reads the container state from `input`, loads the bundle and hands
/// accelerator containers to the delegate tool. Returns `Ok(())` for
/// containers that did not ask for accelerators.
pub fn execute<R: Read>(input: R, config: &HookConfig, logging: &LoggingContext) -> Result<()> {
    let container = ContainerConfig::load(input)?;
    dispatch(&container, config, logging)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use accel_hook_oci::OciError;

    use super::*;
    use crate::error::HookError;
    use crate::logging::LogSink;

    fn logging() -> LoggingContext {
        LoggingContext {
            log_file: PathBuf::from("/var/log/accelerator-runtime-hook.log"),
            debug: false,
            sink: LogSink::File,
        }
    }

    fn missing_tool() -> HookConfig {
        HookConfig {
            tool: "definitely-not-an-installed-accelerator-tool".to_string(),
            ..HookConfig::default()
        }
    }

    fn state_for(bundle: &Path, env: &[&str]) -> String {
        let config = serde_json::json!({
            "ociVersion": "1.0.2",
            "process": {"cwd": "/", "env": env},
            "root": {"path": "rootfs"},
        });
        std::fs::write(bundle.join("config.json"), config.to_string()).unwrap();
        serde_json::json!({
            "ociVersion": "1.0.2",
            "id": "prestart-test",
            "status": "created",
            "pid": 99,
            "bundle": bundle,
        })
        .to_string()
    }

    #[test]
    fn test_plain_container_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        for env in [
            vec!["PATH=/bin"],
            vec!["ACCELERATOR_DEVICES="],
            vec!["ACCELERATOR_DEVICES=void"],
            vec!["ACCELERATOR_DEVICES=none", "ACCELERATOR_FUNCTIONS=compute"],
        ] {
            let state = state_for(dir.path(), &env);
            assert!(execute(state.as_bytes(), &missing_tool(), &logging()).is_ok());
        }
    }

    #[test]
    fn test_accelerator_container_needs_tool() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path(), &["ACCELERATOR_DEVICES=gpu0"]);

        let err = execute(state.as_bytes(), &missing_tool(), &logging()).unwrap_err();
        assert!(matches!(err, HookError::ToolNotFound { .. }));
    }

    #[test]
    fn test_malformed_environment_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path(), &["PATH=/bin", "MALFORMED"]);

        let err = execute(state.as_bytes(), &missing_tool(), &logging()).unwrap_err();
        assert!(matches!(err, HookError::Oci(OciError::MalformedEnv(_))));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = execute(std::io::empty(), &missing_tool(), &logging()).unwrap_err();
        assert!(matches!(err, HookError::Oci(OciError::StateDecode(_))));
        assert_eq!(err.exit_code(), 1);
    }
}
