//! Live filesystem adapter using `std::fs`.

use std::fs::{self, FileType};
use std::io;
use std::path::Path;

use crate::ports::filesystem::{EntryKind, FileSystem, RawEntry};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn kind_of(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(kind_from(&fs::metadata(path)?.file_type()))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_symlink() {
                // A target that cannot be resolved is neither file nor directory.
                fs::metadata(entry.path())
                    .map_or(EntryKind::Other, |meta| kind_from(&meta.file_type()))
            } else {
                kind_from(&file_type)
            };
            entries.push(RawEntry::new(entry.file_name(), kind));
        }
        Ok(entries)
    }
}

fn kind_from(file_type: &FileType) -> EntryKind {
    if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    }
}
