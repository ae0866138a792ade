//! Command dispatch and handlers.

pub mod list;
pub mod verify;

use crate::cli::Command;
use crate::config::{Overrides, Settings};
use crate::context::ServiceContext;
use crate::listing::CollectError;

/// Dispatch a parsed command to its handler using live adapters.
///
/// Settings are read from the environment and then overlaid with the
/// command's flags.
///
/// # Errors
///
/// Returns an error string if the environment holds an invalid setting or
/// the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let settings = Settings::from_env().map_err(|e| e.to_string())?;
    dispatch_with_context(command, &ServiceContext::live(), settings)
}

/// Dispatch a command with the given service context and base settings.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: Settings,
) -> Result<(), String> {
    match command {
        Command::Verify { input, output, case, format, allow_empty, strict } => {
            let settings = settings.with_overrides(Overrides {
                case: *case,
                format: *format,
                allow_empty: *allow_empty,
            });
            verify::run(ctx, input, output, settings, *strict)
        }
        Command::List { dir } => list::run(ctx, dir),
    }
}

/// Turns a collector failure into a message telling the user what to fix.
pub(crate) fn describe_collect_error(err: &CollectError) -> String {
    match err {
        CollectError::PathNotFound { path } => format!(
            "Folder not found: {}. Check that the path exists and is a folder.",
            path.display()
        ),
        CollectError::AccessDenied { path } => format!(
            "Access denied: {}. Check that you have permission to read this folder.",
            path.display()
        ),
        CollectError::Io { .. } => format!("Error during verification: {err}"),
    }
}
