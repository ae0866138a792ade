//! In-memory filesystem serving a scripted directory tree.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::{EntryKind, FileSystem, RawEntry};

#[derive(Debug, Clone)]
enum DirState {
    Readable(Vec<RawEntry>),
    Denied,
    Broken(String),
}

/// In-memory filesystem for exercising the collector without touching disk.
///
/// Directories are registered with their children in enumeration order.
/// Children registered as files resolve to [`EntryKind::File`] through
/// [`FileSystem::kind_of`]; children registered as directories only resolve
/// when they are registered themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    dirs: HashMap<PathBuf, DirState>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem in which every path is missing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a readable directory whose children are enumerated in the given order.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: Vec<RawEntry>) -> Self {
        self.dirs.insert(path.into(), DirState::Readable(entries));
        self
    }

    /// Registers a directory containing only regular files.
    #[must_use]
    pub fn with_files(self, path: impl Into<PathBuf>, names: &[&str]) -> Self {
        let entries = names.iter().map(|n| RawEntry::new(*n, EntryKind::File)).collect();
        self.with_dir(path, entries)
    }

    /// Registers a directory that exists but cannot be enumerated.
    #[must_use]
    pub fn with_denied_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into(), DirState::Denied);
        self
    }

    /// Registers a directory whose enumeration fails partway with `message`.
    #[must_use]
    pub fn with_broken_dir(mut self, path: impl Into<PathBuf>, message: &str) -> Self {
        self.dirs.insert(path.into(), DirState::Broken(message.to_string()));
        self
    }

    fn registered_child(&self, path: &Path) -> Option<EntryKind> {
        let parent = path.parent()?;
        let name = path.file_name()?;
        match self.dirs.get(parent)? {
            DirState::Readable(entries) => {
                entries.iter().find(|e| e.name.as_os_str() == name).map(|e| e.kind)
            }
            DirState::Denied | DirState::Broken(_) => None,
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn kind_of(&self, path: &Path) -> io::Result<EntryKind> {
        if self.dirs.contains_key(path) {
            return Ok(EntryKind::Directory);
        }
        match self.registered_child(path) {
            Some(EntryKind::Directory) | None => Err(not_found(path)),
            Some(kind) => Ok(kind),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        match self.dirs.get(path) {
            Some(DirState::Readable(entries)) => Ok(entries.clone()),
            Some(DirState::Denied) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )),
            Some(DirState::Broken(message)) => Err(io::Error::other(message.clone())),
            None => Err(not_found(path)),
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no such directory: {}", path.display()))
}
