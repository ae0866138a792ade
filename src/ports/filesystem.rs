//! Filesystem port for read-only directory queries.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// What a path or directory child resolves to once symlinks are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else: sockets, devices, FIFOs, dangling symlinks.
    Other,
}

/// A direct child of a directory, as reported by [`FileSystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Base name of the child, without any directory component.
    pub name: OsString,
    /// Kind of the child after following symlinks.
    pub kind: EntryKind,
}

impl RawEntry {
    /// Creates a raw entry from a name and kind.
    #[must_use]
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// Provides read-only access to directory structure.
///
/// Abstracting the filesystem lets the collector be exercised against
/// in-memory fakes, including failure modes that are hard to produce on a
/// real disk (permission errors when running as root, for instance).
pub trait FileSystem: Send + Sync {
    /// Resolves `path`, following symlinks, and reports its kind.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the path cannot be resolved.
    fn kind_of(&self, path: &Path) -> io::Result<EntryKind>;

    /// Enumerates the direct children of the directory at `path`.
    ///
    /// The order is whatever the underlying enumeration yields.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory or any of its
    /// entries cannot be read. No partial result is returned.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>>;
}
