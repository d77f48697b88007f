//! OCI bundle handling.
//!
//! A hook only needs `config.json` from the bundle; the rest of the bundle
//! layout is not inspected.
//!
//! Reference: <https://github.com/opencontainers/runtime-spec/blob/main/bundle.md>

use std::path::{Path, PathBuf};

use accel_hook_constants::paths::BUNDLE_CONFIG;
use tracing::debug;

use crate::config::{Process, Root, Spec};
use crate::error::Result;

/// A loaded bundle whose spec carries both `process` and `root`.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Bundle directory as given by the runtime.
    path: PathBuf,
    /// Process section of the spec.
    process: Process,
    /// Root section of the spec.
    root: Root,
}

impl Bundle {
    /// Load `config.json` from a bundle directory.
    ///
    /// The bundle path is used as given. Fails if the file cannot be opened
    /// or decoded, or if it lacks `process` or `root`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config_path = path.join(BUNDLE_CONFIG);

        let spec = Spec::load(&config_path)?;
        debug!("Loaded OCI spec from {}", config_path.display());

        let (process, root) = spec.into_parts()?;
        Ok(Self {
            path,
            process,
            root,
        })
    }

    /// Get the bundle directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the config.json path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.path.join(BUNDLE_CONFIG)
    }

    /// Get the process section.
    #[must_use]
    pub const fn process(&self) -> &Process {
        &self.process
    }

    /// Get the root section.
    #[must_use]
    pub const fn root(&self) -> &Root {
        &self.root
    }

    /// Consume the bundle, keeping the spec sections.
    #[must_use]
    pub fn into_parts(self) -> (Process, Root) {
        (self.process, self.root)
    }
}
