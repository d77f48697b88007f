//! Hook command-line surface.
//!
//! The runtime invokes the hook with one lifecycle command:
//!
//! - `prestart`: configure accelerators before the container process runs
//! - `poststart`, `poststop`: accepted, nothing to do
//!
//! Runtime configurations written for the older hook pass `-debug` and
//! `-config` with a single dash; [`normalize_flags`] rewrites those before
//! parsing.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

pub mod prestart;

/// OCI runtime hook for accelerator containers
#[derive(Debug, Parser)]
#[command(name = "accelerator-runtime-hook")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Lifecycle command sent by the runtime
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output (also accepted as -debug)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Hook configuration file
    ///
    /// Defaults to /etc/accelerator-runtime-hook.toml when that file exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Lifecycle commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the prestart hook
    Prestart,

    /// Nothing to do
    Poststart,

    /// Nothing to do
    Poststop,
}

impl Commands {
    /// Whether the command exits successfully without reading any input.
    #[must_use]
    pub const fn is_noop(self) -> bool {
        matches!(self, Self::Poststart | Self::Poststop)
    }
}

/// Flags that are also accepted in single-dash form.
const SINGLE_DASH_FLAGS: &[&str] = &["debug", "config"];

/// Rewrite single-dash `-debug`, `-config PATH` and `-config=PATH` to their
/// double-dash form.
///
/// Only arguments before the lifecycle command are touched, and the value
/// following `-config` is passed through as-is.
pub fn normalize_flags<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut value_next = false;

    for arg in args.by_ref() {
        if value_next {
            value_next = false;
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            break;
        };
        let Some(flag) = text.strip_prefix('-') else {
            out.push(arg);
            break;
        };
        let bare = flag.strip_prefix('-').unwrap_or(flag);
        let (name, inline) = bare.split_once('=').map_or((bare, false), |(n, _)| (n, true));
        value_next = name == "config" && !inline;

        if !flag.starts_with('-') && SINGLE_DASH_FLAGS.contains(&name) {
            out.push(format!("-{text}").into());
        } else {
            out.push(arg);
        }
    }

    out.extend(args);
    out
}
