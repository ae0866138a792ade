//! Verification of an input listing against an output listing.
//!
//! For every input file the verifier records whether a same-named file
//! exists in the output listing. The output names are hashed once up front,
//! so a run is linear in the combined size of both listings.

use std::borrow::Cow;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::listing::{FileEntry, Listing};

/// How file names are compared.
///
/// Never inferred from the host filesystem: identical listings verify the
/// same way on every platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Names must be identical.
    #[default]
    Sensitive,
    /// Names are compared after Unicode lowercasing.
    Insensitive,
}

impl CaseSensitivity {
    fn key<'a>(self, name: &'a OsStr) -> Cow<'a, OsStr> {
        match self {
            Self::Sensitive => Cow::Borrowed(name),
            // Names that are not UTF-8 only fold ASCII letters; other bytes stay as is.
            Self::Insensitive => Cow::Owned(match name.to_str() {
                Some(text) => OsString::from(text.to_lowercase()),
                None => name.to_ascii_lowercase(),
            }),
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sensitive => "sensitive",
            Self::Insensitive => "insensitive",
        })
    }
}

impl FromStr for CaseSensitivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            other => Err(format!(
                "unknown case sensitivity '{other}' (expected sensitive or insensitive)"
            )),
        }
    }
}

/// Outcome for a single input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// The input file's name.
    pub name: FileEntry,
    /// Whether a file with the same name exists in the output listing.
    pub matched: bool,
}

/// One result per input file, in input listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerificationReport {
    results: Vec<VerificationResult>,
}

impl VerificationReport {
    /// Number of results, always equal to the input listing's length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` when the input listing was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates results in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, VerificationResult> {
        self.results.iter()
    }

    /// The results as a slice.
    #[must_use]
    pub fn results(&self) -> &[VerificationResult] {
        &self.results
    }

    /// Number of input files with a counterpart in the output.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.results.iter().filter(|r| r.matched).count()
    }

    /// Number of input files without a counterpart in the output.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.len() - self.matched_count()
    }

    /// The input files without a counterpart, in input order.
    #[must_use]
    pub fn unmatched(&self) -> Vec<&FileEntry> {
        self.results.iter().filter(|r| !r.matched).map(|r| &r.name).collect()
    }

    /// Returns `true` if every input file was matched. Vacuously true when empty.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.results.iter().all(|r| r.matched)
    }
}

impl<'a> IntoIterator for &'a VerificationReport {
    type Item = &'a VerificationResult;
    type IntoIter = std::slice::Iter<'a, VerificationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Verifies `input` against `output` with exact, case-sensitive matching.
#[must_use]
pub fn verify(input: &Listing, output: &Listing) -> VerificationReport {
    verify_with(input, output, CaseSensitivity::Sensitive)
}

/// Verifies `input` against `output` using the given name comparison.
///
/// Duplicate names in `output` are harmless: only presence is recorded.
#[must_use]
pub fn verify_with(
    input: &Listing,
    output: &Listing,
    case: CaseSensitivity,
) -> VerificationReport {
    let available: HashSet<Cow<'_, OsStr>> = output.iter().map(|e| case.key(e.name())).collect();

    let results: Vec<VerificationResult> = input
        .iter()
        .map(|entry| {
            trace!(name = %entry, "verifying input file");
            VerificationResult {
                name: entry.clone(),
                matched: available.contains(&case.key(entry.name())),
            }
        })
        .collect();

    let report = VerificationReport { results };
    debug!(
        inputs = report.len(),
        outputs = output.len(),
        matched = report.matched_count(),
        case = %case,
        "verified listings"
    );
    report
}
