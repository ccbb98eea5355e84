//! Build-configuration derivation for Kendryte K210 framework packages.
//!
//! An external build orchestrator hands this crate two things: a *board
//! manifest* (which hardware, which build variant, which clock) and the
//! install root of a *framework package* (the directory tree shipping the
//! Arduino core or one of the Kendryte SDKs). The crate answers with a
//! [`BuildConfig`]: compiler flags, preprocessor defines, include and
//! library search paths, the linker script, and the link-flag order,
//! including the `--start-group`/`--end-group` bracket around prebuilt
//! archives that lets the linker settle circular symbol references between
//! them.
//!
//! Derivation is a single pass and side-effect free. The filesystem is only
//! read (two existence probes and one directory listing), and those reads go
//! through [`FsView`] so everything is testable against a stub. There is no
//! global state: each call produces an independent, immutable value.

mod board;
mod build_config;
mod derive;
mod frameworks;
mod layout;


use std::fmt;

use camino::Utf8PathBuf;

pub use crate::{
    board::{BoardConfig, BoardConfigData},
    build_config::{BuildConfig, Define, StaticLibBuild},
    derive::{
        build_link_flags, derive_defines, derive_include_paths, discover_archives,
        resolve_linker_script,
    },
    frameworks::{CoreLib, DefineValue, Framework, FrameworkOptions},
    layout::{FrameworkLayout, FsView, LocalFs},
};

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Why a build configuration could not be derived. Any of these aborts the
/// configuration phase; the orchestrator shows the message to the user
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The framework package is not installed where the layout says.
    FrameworkNotFound(Utf8PathBuf),
    /// No `build.ldscript` override, and the default script is absent.
    LinkerScriptNotFound(Utf8PathBuf),
    /// The board manifest is malformed or missing a required key.
    Configuration(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FrameworkNotFound(root) => {
                write!(f, "framework directory not found: {root}")
            }
            ConfigError::LinkerScriptNotFound(script) => {
                write!(f, "linker script not found: {script}")
            }
            ConfigError::Configuration(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
