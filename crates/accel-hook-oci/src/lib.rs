//! # accel-hook-oci
//!
//! The slice of the OCI runtime specification a lifecycle hook needs:
//!
//! - **State**: the container state document a runtime writes to the hook's stdin
//! - **Configuration**: `root.path` and `process.env` of a bundle's `config.json`
//! - **Bundles**: locating and loading `config.json` from a bundle directory
//!
//! ## Example
//!
//! ```no_run
//! use accel_hook_oci::{Bundle, HookState};
//!
//! let state = HookState::from_reader(std::io::stdin().lock())?;
//! let bundle = Bundle::load(&state.bundle)?;
//! let env = bundle.process().env_map()?;
//! println!("{} variables, rootfs at {}", env.len(), bundle.root().path);
//! # Ok::<(), accel_hook_oci::OciError>(())
//! ```
//!
//! Only the fields the hook acts on are modelled strictly; everything else in
//! `config.json` is ignored during decoding.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod bundle;
pub mod config;
pub mod error;
pub mod state;

pub use bundle::Bundle;
pub use config::{EnvMap, Process, Root, Spec};
pub use error::{OciError, Result};
pub use state::HookState;
