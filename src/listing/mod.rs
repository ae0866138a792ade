//! Listing collection.
//!
//! Produces the flat set of regular-file names directly inside a directory.
//! Subdirectories, special files and dangling symlinks are skipped, and
//! nothing is recursed into. The listing keeps the filesystem's enumeration
//! order; no sort is applied here.

pub mod error;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tokio::task::JoinError;
use tracing::{debug, trace};

pub use error::CollectError;

use crate::context::ServiceContext;
use crate::ports::filesystem::EntryKind;

/// An absolute path naming the directory to list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryPath(PathBuf);

impl DirectoryPath {
    /// Builds a directory path, anchoring relative paths at the current
    /// working directory.
    ///
    /// Anchoring is lexical: symlinks and `..` components are left for the
    /// filesystem to resolve when the directory is listed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::PathNotFound`] for an empty path, or when the
    /// current working directory cannot be determined for a relative one.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, CollectError> {
        let path = path.as_ref();
        std::path::absolute(path)
            .map(Self)
            .map_err(|_| CollectError::PathNotFound { path: path.to_path_buf() })
    }

    /// The absolute path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for DirectoryPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

/// A file's base name.
///
/// Identity is exact equality of the raw OS string, so names that are not
/// valid UTF-8 still compare byte for byte. Whether `a.txt` and `A.TXT` can
/// coexist in one directory is up to the host filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    name: OsString,
}

impl FileEntry {
    /// Creates an entry from a base name.
    #[must_use]
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    /// The raw base name.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The base name for display, with invalid UTF-8 replaced.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl Serialize for FileEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display_name())
    }
}

/// The regular files found directly inside one directory, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<FileEntry>,
}

impl Listing {
    /// Builds a listing from names, preserving their order.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        names.into_iter().map(FileEntry::new).collect()
    }

    /// Number of files in the listing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the directory held no regular files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }
}

impl FromIterator<FileEntry> for Listing {
    fn from_iter<T: IntoIterator<Item = FileEntry>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Listing {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Lists the regular files directly inside `path`.
///
/// Symlinks are followed when classifying entries, so a link to a file
/// counts as a file and a link to a directory does not.
///
/// # Errors
///
/// - [`CollectError::PathNotFound`] if `path` is missing or not a directory.
/// - [`CollectError::AccessDenied`] if it cannot be resolved or enumerated
///   for lack of permission.
/// - [`CollectError::Io`] for any other enumeration failure.
pub fn collect(ctx: &ServiceContext, path: &DirectoryPath) -> Result<Listing, CollectError> {
    let root = path.as_path();
    match ctx.fs.kind_of(root).map_err(|e| CollectError::from_io(root, e))? {
        EntryKind::Directory => {}
        EntryKind::File | EntryKind::Other => {
            return Err(CollectError::PathNotFound { path: root.to_path_buf() });
        }
    }

    let raw = ctx.fs.read_dir(root).map_err(|e| CollectError::from_io(root, e))?;
    let total = raw.len();
    let listing: Listing = raw
        .into_iter()
        .filter_map(|entry| {
            if entry.kind == EntryKind::File {
                Some(FileEntry::new(entry.name))
            } else {
                trace!(name = ?entry.name, kind = ?entry.kind, "skipping non-file entry");
                None
            }
        })
        .collect();

    debug!(
        path = %path,
        files = listing.len(),
        skipped = total - listing.len(),
        "collected listing"
    );
    Ok(listing)
}

/// Lists two directories concurrently on the blocking thread pool.
///
/// The result is identical to calling [`collect`] on each path in turn. When
/// both collections fail, the input's error is returned.
///
/// # Errors
///
/// Returns the first [`CollectError`] in input-then-output order.
pub async fn collect_pair(
    ctx: &ServiceContext,
    input: &DirectoryPath,
    output: &DirectoryPath,
) -> Result<(Listing, Listing), CollectError> {
    let (input, output) =
        tokio::join!(collect_blocking(ctx, input), collect_blocking(ctx, output));
    Ok((input?, output?))
}

async fn collect_blocking(
    ctx: &ServiceContext,
    path: &DirectoryPath,
) -> Result<Listing, CollectError> {
    let task_ctx = ctx.clone();
    let task_path = path.clone();
    let joined = tokio::task::spawn_blocking(move || collect(&task_ctx, &task_path)).await;
    settle(path, joined)
}

/// Unwraps a finished listing task. A panic is resumed on the caller; a
/// cancelled task (runtime shutting down) becomes an I/O failure.
fn settle(
    path: &DirectoryPath,
    joined: Result<Result<Listing, CollectError>, JoinError>,
) -> Result<Listing, CollectError> {
    match joined {
        Ok(result) => result,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => Err(CollectError::Io {
            path: path.as_path().to_path_buf(),
            source: io::Error::new(io::ErrorKind::Interrupted, err.to_string()),
        }),
    }
}
