//! Integration tests for accel-hook-oci crate.
//!
//! These tests walk the state -> bundle -> environment path a hook follows.

use std::fs;
use std::path::Path;

use accel_hook_oci::{Bundle, HookState, OciError};

fn create_bundle(dir: &Path, config: &str) {
    fs::create_dir_all(dir.join("rootfs")).unwrap();
    fs::write(dir.join("config.json"), config).unwrap();
}

/// Test the full read path from a runtime state document to the environment.
#[test]
fn test_state_to_environment() {
    let dir = tempfile::tempdir().unwrap();
    let bundle_path = dir.path().join("bundle");
    create_bundle(
        &bundle_path,
        r#"{
            "ociVersion": "1.0.2",
            "process": {
                "cwd": "/",
                "env": [
                    "PATH=/usr/bin:/bin",
                    "ACCELERATOR_DEVICES=gpu0,gpu1",
                    "ACCELERATOR_FUNCTIONS=compute"
                ]
            },
            "root": {"path": "rootfs"}
        }"#,
    );

    let stdin = format!(
        r#"{{"ociVersion": "1.0.2", "id": "integration", "status": "created", "pid": 4242, "bundle": {}}}"#,
        serde_json::to_string(&bundle_path).unwrap()
    );

    let state = HookState::from_reader(stdin.as_bytes()).unwrap();
    assert_eq!(state.pid, Some(4242));

    let bundle = Bundle::load(&state.bundle).unwrap();
    assert_eq!(bundle.root().path, "rootfs");

    let env = bundle.process().env_map().unwrap();
    assert_eq!(
        env.get("ACCELERATOR_DEVICES").map(String::as_str),
        Some("gpu0,gpu1")
    );
    assert_eq!(
        env.get("ACCELERATOR_FUNCTIONS").map(String::as_str),
        Some("compute")
    );
}

/// Missing `root` and missing `process` fail with different messages.
#[test]
fn test_missing_sections_are_distinguished() {
    let dir = tempfile::tempdir().unwrap();

    let no_root = dir.path().join("no-root");
    create_bundle(&no_root, r#"{"process": {"env": ["A=1"]}}"#);
    let no_process = dir.path().join("no-process");
    create_bundle(&no_process, r#"{"root": {"path": "rootfs"}}"#);

    let root_err = Bundle::load(&no_root).unwrap_err();
    let process_err = Bundle::load(&no_process).unwrap_err();

    assert!(root_err.to_string().contains("root"));
    assert!(process_err.to_string().contains("process"));
    assert_ne!(root_err.to_string(), process_err.to_string());
}

/// A malformed environment entry in an otherwise valid bundle is an error.
#[test]
fn test_malformed_environment_in_bundle() {
    let dir = tempfile::tempdir().unwrap();
    create_bundle(
        dir.path(),
        r#"{"process": {"env": ["PATH=/bin", "MALFORMED"]}, "root": {"path": "rootfs"}}"#,
    );

    let bundle = Bundle::load(dir.path()).unwrap();
    let err = bundle.process().env_map().unwrap_err();
    assert!(matches!(err, OciError::MalformedEnv(_)));
    assert!(err.to_string().contains("MALFORMED"));
}

/// Runtime-generated specs carry many sections the hook never reads; their
/// shape does not matter.
#[test]
fn test_bundle_with_unusual_unread_sections_loads() {
    let dir = tempfile::tempdir().unwrap();
    create_bundle(
        dir.path(),
        r#"{
            "ociVersion": "1.0.2",
            "hostname": null,
            "annotations": null,
            "process": {"terminal": null, "cwd": null, "args": null, "env": ["TERM=xterm"]},
            "root": {"path": "/abs/rootfs", "readonly": null}
        }"#,
    );

    let (process, root) = Bundle::load(dir.path()).unwrap().into_parts();
    assert_eq!(root.path, "/abs/rootfs");
    assert_eq!(process.env, vec!["TERM=xterm"]);
}
