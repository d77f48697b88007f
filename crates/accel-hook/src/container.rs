//! Per-invocation view of the container a hook was called for.

use std::io::Read;
use std::path::PathBuf;

use accel_hook_oci::{Bundle, EnvMap, HookState, Root};
use tracing::info;

use crate::accelerator::AcceleratorConfig;
use crate::error::Result;

/// Everything the dispatcher needs to know about the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Container init process ID, `0` when the runtime sent none.
    pub pid: i64,
    /// Root filesystem path exactly as written in `config.json`.
    pub rootfs: PathBuf,
    /// Declared process environment.
    pub env: EnvMap,
    /// Accelerator request, if any.
    pub accelerators: Option<AcceleratorConfig>,
}

impl ContainerConfig {
    /// Combine the pieces gathered from state and bundle.
    #[must_use]
    pub fn new(pid: i64, root: &Root, env: EnvMap) -> Self {
        let accelerators = AcceleratorConfig::from_env(&env);
        Self {
            pid,
            rootfs: PathBuf::from(&root.path),
            env,
            accelerators,
        }
    }

    /// Read the hook state from `input`, then load its bundle.
    pub fn load<R: Read>(input: R) -> Result<Self> {
        let state = HookState::from_reader(input)?;
        info!("Container Bundle [{}]", state.bundle.display());

        let bundle = Bundle::load(&state.bundle)?;
        let env = bundle.process().env_map()?;

        Ok(Self::new(state.pid.unwrap_or_default(), bundle.root(), env))
    }
}
