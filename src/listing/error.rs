//! Collector failure taxonomy.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a directory could not be listed.
///
/// Every variant is terminal for the collection attempt: no partial listing
/// accompanies an error.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The path does not exist or does not resolve to a directory.
    #[error("folder not found: {}", path.display())]
    PathNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The process lacks permission to resolve or enumerate the directory.
    #[error("access denied: {}", path.display())]
    AccessDenied {
        /// The path that was requested.
        path: PathBuf,
    },

    /// Enumeration failed for another reason (I/O error mid-listing, etc.).
    #[error("failed to list {}: {source}", path.display())]
    Io {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl CollectError {
    /// Classifies an I/O error raised while resolving or enumerating `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => Self::PathNotFound { path },
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the failed collection was asked for.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PathNotFound { path } | Self::AccessDenied { path } | Self::Io { path, .. } => {
                path
            }
        }
    }
}
