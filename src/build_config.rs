//! The derived build configuration, as handed to the orchestrator.
//!
//! Everything here is plain data. The orchestrator consumes it either
//! directly or as JSON, so the field names are part of the contract.

use std::fmt;

use camino::Utf8PathBuf;
use serde::Serialize;

/// A preprocessor define: `NAME` or `NAME=VALUE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Define {
    pub name: String,
    pub value: Option<String>,
}

impl Define {
    pub fn flag(name: &str) -> Define {
        Define { name: name.to_string(), value: None }
    }

    pub fn valued(name: &str, value: impl Into<String>) -> Define {
        Define { name: name.to_string(), value: Some(value.into()) }
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A request for the orchestrator's build-a-static-library helper: compile
/// `source_dir` into an archive named `name`, keeping only the sources that
/// pass `src_filter` (the `+<...>`/`-<...>` syntax is the orchestrator's).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticLibBuild {
    pub name: String,
    pub source_dir: Utf8PathBuf,
    pub src_filter: Vec<String>,
}

/// Everything the orchestrator needs to drive the toolchain.
///
/// Constructed once per derivation by [`Framework::derive_config`] and
/// immutable afterwards.
///
/// [`Framework::derive_config`]: crate::Framework::derive_config
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    pub compiler_flags: Vec<String>,
    pub linker_flags: Vec<String>,
    pub defines: Vec<Define>,
    pub include_paths: Vec<Utf8PathBuf>,
    pub library_paths: Vec<Utf8PathBuf>,
    pub library_names: Vec<String>,
    pub linker_script_path: Utf8PathBuf,
    /// Directories the orchestrator scans for user-facing add-on libraries.
    pub lib_source_dirs: Vec<Utf8PathBuf>,
    /// Framework source trees the orchestrator compiles to archives itself.
    pub static_libs: Vec<StaticLibBuild>,
}
