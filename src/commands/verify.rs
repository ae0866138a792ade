//! `dirmatch verify` command.

use std::path::Path;

use tracing::info;

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::listing::{collect_pair, DirectoryPath};
use crate::report::{RenderedReport, Summary};
use crate::verify::verify_with;

use super::describe_collect_error;

/// A finished verification, rendered and tallied.
#[derive(Debug)]
pub struct Outcome {
    /// The report in the requested format.
    pub rendered: String,
    /// Match counts.
    pub summary: Summary,
}

/// Execute the `verify` command.
///
/// Prints the rendered report to stdout.
///
/// # Errors
///
/// Returns an error string if a folder cannot be listed, if a folder is
/// empty and `settings.allow_empty` is off, or if `strict` is set and any
/// input file is unmatched.
pub fn run(
    ctx: &ServiceContext,
    input: &Path,
    output: &Path,
    settings: Settings,
    strict: bool,
) -> Result<(), String> {
    let outcome = execute(ctx, input, output, settings)?;
    println!("{}", outcome.rendered);

    if strict && outcome.summary.unmatched > 0 {
        return Err(format!(
            "{} of {} input file(s) have no match in the output folder.",
            outcome.summary.unmatched, outcome.summary.total
        ));
    }
    Ok(())
}

/// Collects both folders, verifies them and renders the report.
///
/// # Errors
///
/// Returns an error string if a folder cannot be listed, if a folder is
/// empty and `settings.allow_empty` is off, or if rendering fails.
pub fn execute(
    ctx: &ServiceContext,
    input: &Path,
    output: &Path,
    settings: Settings,
) -> Result<Outcome, String> {
    let input = DirectoryPath::new(input).map_err(|e| describe_collect_error(&e))?;
    let output = DirectoryPath::new(output).map_err(|e| describe_collect_error(&e))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    let (input_listing, output_listing) = runtime
        .block_on(collect_pair(ctx, &input, &output))
        .map_err(|e| describe_collect_error(&e))?;

    if !settings.allow_empty && (input_listing.is_empty() || output_listing.is_empty()) {
        return Err(
            "One or both folders are empty. Pass --allow-empty to verify anyway.".to_string()
        );
    }

    let report = verify_with(&input_listing, &output_listing, settings.case);
    let rendered = RenderedReport::new(ctx, &input, &output, settings.case, &report);
    info!(
        input = %input,
        output = %output,
        matched = rendered.summary.matched,
        unmatched = rendered.summary.unmatched,
        "verification finished"
    );

    Ok(Outcome { rendered: rendered.render(settings.format)?, summary: rendered.summary })
}
