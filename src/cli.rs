//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::OutputFormat;
use crate::verify::CaseSensitivity;

/// Top-level CLI parser for `dirmatch`.
#[derive(Debug, Parser)]
#[command(
    name = "dirmatch",
    version,
    about = "Check that every input file has a same-named output file"
)]
pub struct Cli {
    /// Log debug details to stderr (`RUST_LOG` takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report, for each file in INPUT, whether OUTPUT has a file with the same name.
    Verify {
        /// Folder holding the files that were processed.
        input: PathBuf,
        /// Folder the processing step wrote its results to.
        output: PathBuf,
        /// How names are compared [env: DIRMATCH_CASE] [default: sensitive].
        #[arg(long, value_parser = parse_case)]
        case: Option<CaseSensitivity>,
        /// Report format [env: DIRMATCH_FORMAT] [default: text].
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
        /// Verify even when a folder holds no files [env: DIRMATCH_ALLOW_EMPTY].
        #[arg(long)]
        allow_empty: bool,
        /// Exit with failure when any input file has no match.
        #[arg(long)]
        strict: bool,
    },
    /// Print the files directly inside DIR, in enumeration order.
    List {
        /// Folder to list.
        dir: PathBuf,
    },
}

fn parse_case(value: &str) -> Result<CaseSensitivity, String> {
    value.parse()
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse()
}
