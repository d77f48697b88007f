//! Handoff to the accelerator configuration tool.
//!
//! When a container requests accelerators the hook process becomes the
//! delegate tool, so the runtime sees the tool's exit status as the hook's.

use std::path::PathBuf;
use std::process::Command;

use accel_hook_constants::tool::CONFIGURE_COMMAND;
use tracing::info;

use crate::accelerator::AcceleratorConfig;
use crate::config::HookConfig;
use crate::container::ContainerConfig;
use crate::error::{HookError, Result};
use crate::logging::LoggingContext;

/// Resolve the delegate tool through `PATH`.
pub fn locate_tool(tool: &str) -> Result<PathBuf> {
    which::which(tool).map_err(|source| HookError::ToolNotFound {
        tool: tool.to_string(),
        source,
    })
}

/// A fully built delegate command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: PathBuf,
    args: Vec<String>,
}

impl ToolInvocation {
    /// Build the argument vector in the order the tool expects:
    /// `--devices`, `--functions` (only when non-empty), `--pid`, `--rootfs`,
    /// `--log`, `--loglevel`, then `configure`.
    pub fn build(
        program: PathBuf,
        container: &ContainerConfig,
        accelerators: &AcceleratorConfig,
        logging: &LoggingContext,
    ) -> Result<Self> {
        // No symlink resolution.
        let rootfs = std::path::absolute(&container.rootfs).map_err(|source| HookError::Rootfs {
            path: container.rootfs.clone(),
            source,
        })?;

        let mut args = Vec::with_capacity(7);
        args.push(format!("--devices={}", accelerators.devices));
        if accelerators.has_functions() {
            args.push(format!("--functions={}", accelerators.functions));
        }
        args.push(format!("--pid={}", container.pid));
        args.push(format!("--rootfs={}", rootfs.display()));
        args.push(format!("--log={}", logging.log_file.display()));
        args.push(format!("--loglevel={}", logging.tool_log_level()));
        args.push(CONFIGURE_COMMAND.to_string());

        Ok(Self { program, args })
    }

    /// Complete argument vector, program first.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Replace the current process image with the tool.
    ///
    /// Only returns if the replacement failed. The environment is inherited
    /// unchanged.
    #[cfg(unix)]
    pub fn exec(self) -> HookError {
        use std::os::unix::process::CommandExt;

        let source = Command::new(&self.program).args(&self.args).exec();
        HookError::Handoff {
            path: self.program,
            source,
        }
    }

    /// Run the tool to completion and exit with its status.
    ///
    /// Only returns if the tool could not be started.
    #[cfg(not(unix))]
    pub fn exec(self) -> HookError {
        match Command::new(&self.program).args(&self.args).status() {
            Ok(status) => std::process::exit(
                status
                    .code()
                    .unwrap_or(i32::from(crate::error::EXIT_FAILURE)),
            ),
            Err(source) => HookError::Handoff {
                path: self.program,
                source,
            },
        }
    }
}

/// Hand the container to the delegate tool if it requested accelerators.
///
/// Returns `Ok(())` without doing anything for ordinary containers. For
/// accelerator containers this does not return on success.
pub fn dispatch(
    container: &ContainerConfig,
    config: &HookConfig,
    logging: &LoggingContext,
) -> Result<()> {
    let Some(accelerators) = &container.accelerators else {
        return Ok(());
    };

    let program = locate_tool(&config.tool)?;
    let invocation = ToolInvocation::build(program, container, accelerators, logging)?;
    info!("exec command: {:?}", invocation.argv());

    Err(invocation.exec())
}
