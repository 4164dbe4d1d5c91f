//! Settings error types.

use thiserror::Error;

/// A single problem found while validating settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsViolation {
    #[error("Message '{field}' is blank")]
    BlankMessage { field: &'static str },

    #[error("Fraction digits ({found}) exceeds the maximum of {max}")]
    FractionDigitsOutOfRange { found: usize, max: usize },
}

/// Errors that can occur when loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The document is not valid settings JSON
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but holds unusable values
    #[error("Invalid settings: {}", format_violations(.0))]
    Invalid(Vec<SettingsViolation>),
}

fn format_violations(violations: &[SettingsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
