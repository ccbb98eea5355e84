//! Per-framework flag and path tables.
//!
//! Three framework packages can back a K210 board: the Arduino core (which
//! vendors the standalone SDK), the bare standalone SDK, and the FreeRTOS
//! SDK. They differ only in directory layout and in which flags, defines and
//! libraries they register, so each one is a table of static data and a
//! single derivation pass (see the operations re-exported from the crate
//! root) interprets whichever table the board selects.

pub(crate) mod base;

mod arduino;
mod freertos;
mod standalone;

use crate::{
    board::BoardConfig,
    build_config::BuildConfig,
    derive,
    layout::{FrameworkLayout, FsView, LocalFs},
    Result,
};

/// Value column of a define table: either fixed data or a reference to a
/// board-manifest key filled in at derivation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineValue {
    /// Bare `NAME` define.
    None,
    /// Fixed `NAME=VALUE` define.
    Fixed(&'static str),
    /// `build.variant`, emitted as a quoted string literal; the whole define
    /// is skipped when the board configures no variant.
    Variant,
    /// `build.board_def`, emitted as a quoted string literal; required.
    BoardDef,
    /// `build.f_cpu` in Hz; required.
    FCpu,
}

/// Static description of one framework package: which directories the
/// install ships, and which flags, defines and libraries it registers.
///
/// All paths are relative to the install root.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkOptions {
    pub name: &'static str,
    /// Compiler flags appended after the shared machine flags.
    pub cc_flags: &'static [&'static str],
    pub defines: &'static [(&'static str, DefineValue)],
    /// Include roots, in compiler search order.
    pub include_dirs: &'static [&'static str],
    pub lib_dirs: &'static [&'static str],
    /// System libraries, named as in `-l<name>`.
    pub libs: &'static [&'static str],
    /// Fixed link flags appended after the derived ones.
    pub link_flags: &'static [&'static str],
    pub default_ldscript: &'static str,
    /// Directory globbed for prebuilt `*.a` archives, if the package ships
    /// any.
    pub prebuilt_lib_dir: Option<&'static str>,
    /// Directories the orchestrator scans for user-facing add-on libraries.
    pub lib_source_dirs: &'static [&'static str],
    pub core_lib: CoreLib,
}

/// The framework source tree the orchestrator compiles into the core archive.
#[derive(Debug, Clone, Copy)]
pub struct CoreLib {
    pub name: &'static str,
    pub source_dir: &'static str,
    pub src_filter: &'static [&'static str],
}

/// Framework package selected by the board's project configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    /// `framework-arduino-k210`.
    Arduino,
    /// `framework-kendryte-standalone-sdk`.
    StandaloneSdk,
    /// `framework-kendryte-freertos-sdk`.
    FreertosSdk,
}

impl Framework {
    pub const ALL: &'static [Framework] =
        &[Framework::Arduino, Framework::StandaloneSdk, Framework::FreertosSdk];

    pub fn options(self) -> &'static FrameworkOptions {
        match self {
            Framework::Arduino => &arduino::OPTIONS,
            Framework::StandaloneSdk => &standalone::OPTIONS,
            Framework::FreertosSdk => &freertos::OPTIONS,
        }
    }

    /// Derives the build configuration against the real filesystem.
    pub fn derive_config(
        self,
        board: &BoardConfig,
        layout: &FrameworkLayout,
    ) -> Result<BuildConfig> {
        self.derive_config_with(&LocalFs, board, layout)
    }

    /// Derives the build configuration through the given [`FsView`].
    pub fn derive_config_with(
        self,
        fs: &dyn FsView,
        board: &BoardConfig,
        layout: &FrameworkLayout,
    ) -> Result<BuildConfig> {
        derive::assemble(fs, board, layout, self.options())
    }
}
