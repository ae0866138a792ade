//! Layered settings: built-in defaults, then environment, then CLI flags.

use std::path::Path;

use thiserror::Error;

use crate::report::OutputFormat;
use crate::verify::CaseSensitivity;

/// Environment variable selecting name comparison (`sensitive`/`insensitive`).
pub const ENV_CASE: &str = "DIRMATCH_CASE";
/// Environment variable selecting the report format (`text`/`json`/`yaml`).
pub const ENV_FORMAT: &str = "DIRMATCH_FORMAT";
/// Environment variable permitting empty folders (`1`/`true`/`yes`).
pub const ENV_ALLOW_EMPTY: &str = "DIRMATCH_ALLOW_EMPTY";

/// A setting supplied through the environment could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value '{value}' for {var}: {reason}")]
pub struct ConfigError {
    /// The offending variable.
    pub var: &'static str,
    /// Its raw value.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Effective settings for a verification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Name comparison.
    pub case: CaseSensitivity,
    /// Report format.
    pub format: OutputFormat,
    /// Proceed even when a folder holds no files.
    pub allow_empty: bool,
}

/// Flag values given on the command line; `None` leaves the lower layer in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--case`
    pub case: Option<CaseSensitivity>,
    /// `--format`
    pub format: Option<OutputFormat>,
    /// `--allow-empty`
    pub allow_empty: bool,
}

impl Settings {
    /// Defaults overlaid with the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable with an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable with an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(value) = lookup(ENV_CASE) {
            settings.case = value.parse().map_err(|reason| invalid(ENV_CASE, &value, reason))?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            settings.format = value.parse().map_err(|reason| invalid(ENV_FORMAT, &value, reason))?;
        }
        if let Some(value) = lookup(ENV_ALLOW_EMPTY) {
            settings.allow_empty = parse_flag(&value)
                .ok_or_else(|| invalid(ENV_ALLOW_EMPTY, &value, "expected a boolean".into()))?;
        }
        Ok(settings)
    }

    /// Applies command-line flags on top of these settings.
    #[must_use]
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            case: overrides.case.unwrap_or(self.case),
            format: overrides.format.unwrap_or(self.format),
            allow_empty: self.allow_empty || overrides.allow_empty,
        }
    }
}

/// Loads a `.env` file from the current directory or one of its parents.
///
/// A missing file is fine.
///
/// # Errors
///
/// Returns an error string if a `.env` file exists but cannot be read or parsed.
pub fn load_dotenv() -> Result<(), String> {
    settle_dotenv(dotenvy::dotenv().map(|_| ()))
}

/// Loads variables from the env file at `path`, tolerating its absence.
///
/// # Errors
///
/// Returns an error string if the file exists but cannot be read or parsed.
pub fn load_env_file(path: &Path) -> Result<(), String> {
    settle_dotenv(dotenvy::from_path(path))
}

fn settle_dotenv(result: Result<(), dotenvy::Error>) -> Result<(), String> {
    match result {
        Err(err) if !err.not_found() => Err(format!("Failed to load .env file: {err}")),
        _ => Ok(()),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn invalid(var: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError { var, value: value.to_string(), reason }
}
