//! Verify that a batch step produced an output file for every input file.
//!
//! The core is two operations:
//!
//! - [`listing::collect`] lists the regular files directly inside a folder.
//! - [`verify::verify`] reports, for each input file in order, whether the
//!   output listing holds a file with the same name.
//!
//! The `dirmatch` binary wires these to the command line.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod listing;
pub mod logging;
pub mod ports;
pub mod report;
pub mod verify;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// Help and version requests print to stdout and succeed.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string().trim_end().to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli.command)
}
