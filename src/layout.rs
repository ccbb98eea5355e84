//! Framework installation layout and the filesystem view used to inspect it.
//!
//! Derivation only ever *reads* the filesystem: an existence probe for the
//! install root, one for the default linker script, and a single directory
//! listing for prebuilt archives. Those reads go through [`FsView`] so a
//! whole derivation can run against a stub in tests; [`LocalFs`] is the one
//! real implementation.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

/// Root directory of an installed framework package.
///
/// All table paths are relative to this root; [`FrameworkLayout::join`]
/// anchors them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkLayout {
    root: Utf8PathBuf,
}

impl FrameworkLayout {
    pub fn new(root: impl Into<Utf8PathBuf>) -> FrameworkLayout {
        FrameworkLayout { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(crate) fn join(&self, rel: impl AsRef<Utf8Path>) -> Utf8PathBuf {
        self.root.join(rel)
    }
}

/// Read-only filesystem access used during derivation.
pub trait FsView {
    fn is_dir(&self, path: &Utf8Path) -> bool;
    fn is_file(&self, path: &Utf8Path) -> bool;
    /// Files directly under `path`, in no particular order. An absent or
    /// unreadable directory yields an empty list.
    fn list_files(&self, path: &Utf8Path) -> Vec<Utf8PathBuf>;
}

/// [`FsView`] over the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FsView for LocalFs {
    fn is_dir(&self, path: &Utf8Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Utf8Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, path: &Utf8Path) -> Vec<Utf8PathBuf> {
        let entries = match fs::read_dir(path) {
            Ok(it) => it,
            Err(_) => return Vec::new(),
        };
        entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                // Non-UTF-8 names cannot appear in flag strings; skip them.
                let path = Utf8PathBuf::from_path_buf(entry.path()).ok()?;
                entry.file_type().ok()?.is_file().then_some(path)
            })
            .collect()
    }
}
