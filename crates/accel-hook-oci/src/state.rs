//! OCI container state as delivered to hooks.
//!
//! The runtime writes exactly one state document to a hook's stdin.
//! Reference: <https://github.com/opencontainers/runtime-spec/blob/main/runtime.md#state>

use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::null_as_default;
use crate::error::{OciError, Result};

/// OCI container state.
///
/// Decoded once per hook invocation; only `bundle` and `pid` drive the hook,
/// the remaining fields are carried as received for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookState {
    /// OCI specification version.
    #[serde(default, deserialize_with = "null_as_default")]
    pub oci_version: String,

    /// Container ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Runtime status string, not interpreted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    /// Process ID of the container's init process. Signed, as runtimes
    /// write it from a plain integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,

    /// Path to the bundle directory. Passed through unvalidated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bundle: PathBuf,

    /// Annotations from the container configuration.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub annotations: HashMap<String, String>,
}

impl HookState {
    /// Decode a single state document from `reader`.
    ///
    /// Reading stops at the end of the first JSON value; trailing input is
    /// left unread.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        Self::deserialize(&mut de).map_err(OciError::StateDecode)
    }
}
