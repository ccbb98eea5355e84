//! The derivation operations: board metadata plus framework layout in, build
//! parameters out.
//!
//! Each operation is a single pass over static tables. The only filesystem
//! traffic is the install-root probe, the default-linker-script probe and
//! one directory listing, all through [`FsView`].

use camino::{Utf8Path, Utf8PathBuf};
use itertools::Itertools;

use crate::{
    board::BoardConfig,
    build_config::{BuildConfig, Define, StaticLibBuild},
    frameworks::{base, DefineValue, FrameworkOptions},
    layout::{FrameworkLayout, FsView},
    ConfigError, Result,
};

pub(crate) fn assemble(
    fs: &dyn FsView,
    board: &BoardConfig,
    layout: &FrameworkLayout,
    options: &FrameworkOptions,
) -> Result<BuildConfig> {
    // Nothing else is worth deriving if the package is not installed.
    if !fs.is_dir(layout.root()) {
        return Err(ConfigError::FrameworkNotFound(layout.root().to_path_buf()));
    }
    tracing::debug!("deriving {} configuration from {}", options.name, layout.root());

    let linker_script_path = resolve_linker_script(fs, board, layout, options)?;
    let defines = derive_defines(board, options)?;
    let include_paths = derive_include_paths(board, layout, options);

    let archives = match options.prebuilt_lib_dir {
        Some(dir) => discover_archives(fs, &layout.join(dir)),
        None => Vec::new(),
    };
    tracing::debug!("found {} prebuilt archives", archives.len());

    // Fixed per-framework flags (the system-library group among them) go
    // last, so symbols the archives need from libc and friends still resolve.
    let mut linker_flags = build_link_flags(&linker_script_path, &archives);
    linker_flags.extend(options.link_flags.iter().map(ToString::to_string));

    let compiler_flags =
        base::CC_FLAGS.iter().chain(options.cc_flags).map(ToString::to_string).collect();
    let library_paths = options.lib_dirs.iter().map(|dir| layout.join(dir)).collect();
    let library_names = options.libs.iter().map(ToString::to_string).collect();
    let lib_source_dirs = options.lib_source_dirs.iter().map(|dir| layout.join(dir)).collect();
    let static_libs = derive_static_libs(board, layout, options);

    Ok(BuildConfig {
        compiler_flags,
        linker_flags,
        defines,
        include_paths,
        library_paths,
        library_names,
        linker_script_path,
        lib_source_dirs,
        static_libs,
    })
}

/// A board override wins and is taken verbatim; otherwise the framework's
/// default script is used, and that one must exist.
pub fn resolve_linker_script(
    fs: &dyn FsView,
    board: &BoardConfig,
    layout: &FrameworkLayout,
    options: &FrameworkOptions,
) -> Result<Utf8PathBuf> {
    if let Some(script) = board.ldscript() {
        tracing::debug!("linker script overridden by board: {script}");
        return Ok(Utf8PathBuf::from(script));
    }
    let script = layout.join(options.default_ldscript);
    if !fs.is_file(&script) {
        return Err(ConfigError::LinkerScriptNotFound(script));
    }
    Ok(script)
}

/// Walks the framework's define table, filling board-derived entries in.
///
/// String values coming from the board are emitted as quoted literals with
/// embedded quotes escaped, so an odd variant name cannot smuggle extra
/// tokens into the compiler command line.
pub fn derive_defines(board: &BoardConfig, options: &FrameworkOptions) -> Result<Vec<Define>> {
    let mut defines = Vec::with_capacity(options.defines.len());
    for &(name, value) in options.defines {
        let define = match value {
            DefineValue::None => Define::flag(name),
            DefineValue::Fixed(value) => Define::valued(name, value),
            DefineValue::Variant => match board.variant() {
                Some(variant) => Define::valued(name, quoted(variant)),
                None => continue,
            },
            DefineValue::BoardDef => Define::valued(name, quoted(board.board_def()?)),
            DefineValue::FCpu => Define::valued(name, board.f_cpu()?.to_string()),
        };
        defines.push(define);
    }
    Ok(defines)
}

/// `foo"bar` becomes `"foo\"bar"`.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Table order is compiler search order; a configured variant directory is
/// appended last. No deduplication, no sorting.
pub fn derive_include_paths(
    board: &BoardConfig,
    layout: &FrameworkLayout,
    options: &FrameworkOptions,
) -> Vec<Utf8PathBuf> {
    let mut paths: Vec<_> = options.include_dirs.iter().map(|dir| layout.join(dir)).collect();
    if let Some(variant) = board.variant() {
        paths.push(layout.join("variants").join(variant));
    }
    paths
}

/// Prebuilt `*.a` archives under `lib_dir`, sorted lexicographically so the
/// link line does not depend on readdir order. A missing or empty directory
/// is an empty set, not an error: not every install ships prebuilt archives.
pub fn discover_archives(fs: &dyn FsView, lib_dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    fs.list_files(lib_dir)
        .into_iter()
        .filter(|path| path.extension() == Some("a"))
        .sorted()
        .collect()
}

/// The linker command fragment: script, machine flags, then every discovered
/// archive inside one `--start-group`/`--end-group` pair so the linker
/// re-scans them until cross-archive references settle. The pair is omitted
/// entirely when there are no archives; GNU ld rejects an empty group.
pub fn build_link_flags(ldscript: &Utf8Path, archives: &[Utf8PathBuf]) -> Vec<String> {
    let mut flags = Vec::with_capacity(base::LINK_FLAGS.len() + archives.len() + 3);
    flags.push(format!("-T{ldscript}"));
    flags.extend(base::LINK_FLAGS.iter().map(ToString::to_string));
    if !archives.is_empty() {
        flags.push("-Wl,--start-group".to_string());
        flags.extend(archives.iter().map(ToString::to_string));
        flags.push("-Wl,--end-group".to_string());
    }
    flags
}

/// Static-library build requests: the variant tree first when one is
/// configured, then the framework core.
pub(crate) fn derive_static_libs(
    board: &BoardConfig,
    layout: &FrameworkLayout,
    options: &FrameworkOptions,
) -> Vec<StaticLibBuild> {
    let mut libs = Vec::with_capacity(2);
    if let Some(variant) = board.variant() {
        libs.push(StaticLibBuild {
            name: format!("{}Variant", options.core_lib.name),
            source_dir: layout.join("variants").join(variant),
            src_filter: Vec::new(),
        });
    }
    libs.push(StaticLibBuild {
        name: options.core_lib.name.to_string(),
        source_dir: layout.join(options.core_lib.source_dir),
        src_filter: options.core_lib.src_filter.iter().map(ToString::to_string).collect(),
    });
    libs
}
