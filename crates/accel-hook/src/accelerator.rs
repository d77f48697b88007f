//! Accelerator request resolution from a container's environment.

use accel_hook_constants::env::{ACCELERATOR_DEVICES, ACCELERATOR_FUNCTIONS, DEVICES_DISABLED};
use accel_hook_oci::EnvMap;
use tracing::info;

/// Accelerator resources requested by a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorConfig {
    /// Device selector, never empty and never a disabling sentinel.
    pub devices: String,
    /// Function selector; empty means no restriction.
    pub functions: String,
}

impl AcceleratorConfig {
    /// Resolve the accelerator request declared in `env`.
    ///
    /// Returns `None` when `ACCELERATOR_DEVICES` is unset, empty, `void` or
    /// `none`. Unset and explicitly disabled are not distinguished.
    #[must_use]
    pub fn from_env(env: &EnvMap) -> Option<Self> {
        let devices = env.get(ACCELERATOR_DEVICES).map_or("", String::as_str);
        if devices.is_empty() || DEVICES_DISABLED.contains(&devices) {
            return None;
        }
        let functions = env.get(ACCELERATOR_FUNCTIONS).map_or("", String::as_str);
        info!("{ACCELERATOR_DEVICES} = {devices}, {ACCELERATOR_FUNCTIONS} = {functions}");

        Some(Self {
            devices: devices.to_string(),
            functions: functions.to_string(),
        })
    }

    /// Whether a function restriction was requested.
    #[must_use]
    pub const fn has_functions(&self) -> bool {
        !self.functions.is_empty()
    }
}
