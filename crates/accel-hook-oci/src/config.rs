//! OCI runtime-spec configuration parsing.
//!
//! Only `root.path` and `process.env` of `config.json` are modelled; every
//! other key is skipped while decoding, whatever its type.
//! Reference: <https://github.com/opencontainers/runtime-spec/blob/main/config.md>

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{OciError, Result};

/// Process environment keyed by variable name.
pub type EnvMap = HashMap<String, String>;

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// OCI runtime configuration (config.json).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Spec {
    /// Container's root filesystem.
    #[serde(default)]
    pub root: Option<Root>,

    /// Container process to run.
    #[serde(default)]
    pub process: Option<Process>,
}

impl Spec {
    /// Load OCI spec from a config.json file.
    ///
    /// The file is decoded but not validated; see [`Spec::into_parts`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| OciError::SpecOpen {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| OciError::SpecDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Split into the sections the hook requires.
    ///
    /// `process` is checked before `root`; each absence is reported with the
    /// name of the missing field.
    pub fn into_parts(self) -> Result<(Process, Root)> {
        let process = self.process.ok_or(OciError::MissingField("process"))?;
        let root = self.root.ok_or(OciError::MissingField("root"))?;
        Ok((process, root))
    }
}

/// Root filesystem configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Root {
    /// Path to the root filesystem, absolute or relative to the bundle.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

/// Container process configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Process {
    /// Environment variables in `KEY=VALUE` form.
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: Vec<String>,
}

impl Process {
    /// Build a key-unique map from the declared environment.
    ///
    /// Each entry is split on its first `=`. A later entry overrides an
    /// earlier one with the same key. An entry without `=` fails the whole
    /// map.
    pub fn env_map(&self) -> Result<EnvMap> {
        let mut map = EnvMap::with_capacity(self.env.len());
        for entry in &self.env {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| OciError::MalformedEnv(entry.clone()))?;
            map.insert(key.to_string(), value.to_string());
        }
        Ok(map)
    }
}
