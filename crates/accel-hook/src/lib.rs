//! # accel-hook
//!
//! OCI lifecycle hook that detects containers requesting hardware
//! accelerators and hands them to the accelerator configuration tool.
//!
//! ## Flow
//!
//! ```text
//! stdin state ─► bundle config.json ─► environment ─► ContainerConfig
//!                                                        │
//!                          no ACCELERATOR_DEVICES ◄──────┤
//!                          (exit 0)                      │
//!                                                        ▼
//!                              exec accelerator-container-runtime-tool
//!                                 --devices=… [--functions=…] --pid=…
//!                                 --rootfs=… --log=… --loglevel=… configure
//! ```
//!
//! Every step either succeeds or yields a [`HookError`]; the binary logs it
//! once and exits with [`HookError::exit_code`].

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod accelerator;
pub mod commands;
pub mod config;
pub mod container;
pub mod dispatch;
pub mod error;
pub mod logging;

pub use accelerator::AcceleratorConfig;
pub use config::{ConfigSource, HookConfig};
pub use container::ContainerConfig;
pub use dispatch::ToolInvocation;
pub use error::{HookError, Result};
pub use logging::LoggingContext;
