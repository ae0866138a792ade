//! `dirmatch list` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::listing::{collect, DirectoryPath, Listing};

use super::describe_collect_error;

/// Execute the `list` command.
///
/// Prints one file name per line, in enumeration order.
///
/// # Errors
///
/// Returns an error string if the folder cannot be listed.
pub fn run(ctx: &ServiceContext, dir: &Path) -> Result<(), String> {
    for entry in &execute(ctx, dir)? {
        println!("{entry}");
    }
    Ok(())
}

/// Collects the listing for `dir`.
///
/// # Errors
///
/// Returns an error string if the folder cannot be listed.
pub fn execute(ctx: &ServiceContext, dir: &Path) -> Result<Listing, String> {
    let path = DirectoryPath::new(dir).map_err(|e| describe_collect_error(&e))?;
    collect(ctx, &path).map_err(|e| describe_collect_error(&e))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::adapters::memory::{FixedClock, MemoryFileSystem};

    #[test]
    fn lists_files_in_order() {
        let ctx = ServiceContext::new(
            FixedClock(Utc::now()),
            MemoryFileSystem::new().with_files("/in", &["b", "a"]),
        );
        assert_eq!(execute(&ctx, Path::new("/in")).unwrap(), Listing::from_names(["b", "a"]));
        assert!(run(&ctx, Path::new("/in")).is_ok());
    }

    #[test]
    fn missing_folder_is_an_error() {
        let ctx = ServiceContext::new(FixedClock(Utc::now()), MemoryFileSystem::new());
        let err = execute(&ctx, Path::new("/nope")).unwrap_err();
        assert!(err.starts_with("Folder not found"));
    }
}
