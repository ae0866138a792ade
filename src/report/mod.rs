//! Rendering of verification reports for people and machines.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::listing::DirectoryPath;
use crate::verify::{CaseSensitivity, VerificationReport, VerificationResult};

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per input file plus a summary.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown output format '{other}' (expected text, json or yaml)")),
        }
    }
}

/// Match counts for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of input files checked.
    pub total: usize,
    /// Input files with a counterpart in the output folder.
    pub matched: usize,
    /// Input files without a counterpart.
    pub unmatched: usize,
}

impl Summary {
    /// Tallies a report.
    #[must_use]
    pub fn of(report: &VerificationReport) -> Self {
        let matched = report.matched_count();
        Self { total: report.len(), matched, unmatched: report.len() - matched }
    }
}

/// A report together with the context it was produced in.
#[derive(Debug, Serialize)]
pub struct RenderedReport<'a> {
    /// Folder whose files were checked.
    pub input: String,
    /// Folder searched for counterparts.
    pub output: String,
    /// Name comparison used.
    pub case: CaseSensitivity,
    /// When the report was rendered.
    pub checked_at: DateTime<Utc>,
    /// Match counts.
    pub summary: Summary,
    /// Per-file results in input order.
    pub results: &'a [VerificationResult],
}

impl<'a> RenderedReport<'a> {
    /// Wraps `report`, stamping it with the context's clock.
    #[must_use]
    pub fn new(
        ctx: &ServiceContext,
        input: &DirectoryPath,
        output: &DirectoryPath,
        case: CaseSensitivity,
        report: &'a VerificationReport,
    ) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            case,
            checked_at: ctx.clock.now(),
            summary: Summary::of(report),
            results: report.results(),
        }
    }

    /// Renders the report in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error string if JSON or YAML serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| format!("Failed to serialize report as JSON: {e}")),
            OutputFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| format!("Failed to serialize report as YAML: {e}")),
        }
    }

    fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.results.len() + 2);
        for result in self.results {
            if result.matched {
                lines.push(format!("Match found for {} in output folder.", result.name));
            } else {
                lines.push(format!("No match found for {} in output folder.", result.name));
            }
        }
        lines.push(String::new());
        lines.push(format!(
            "{} of {} input file(s) matched, {} missing.",
            self.summary.matched, self.summary.total, self.summary.unmatched
        ));
        lines.join("\n")
    }
}
