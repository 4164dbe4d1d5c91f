//! Calculator configuration.
//!
//! Settings are plain data: the message texts for each grammar violation and
//! the number of decimals used for fractional results. They are loaded from
//! JSON and validated with Stillwater's `Validation`, so a document with
//! several problems reports all of them at once.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::settings::Settings;
//!
//! let settings = Settings::from_json(r#"{ "fraction_digits": 3 }"#).unwrap();
//! assert_eq!(settings.fraction_digits, 3);
//! assert_eq!(settings.messages.invalid_expression, "the expression is invalid");
//! ```

pub mod error;
pub mod messages;

pub use error::{SettingsError, SettingsViolation};
pub use messages::ErrorMessages;

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest accepted `fraction_digits`.
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Configuration for a calculator session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Texts shown on the error channel.
    pub messages: ErrorMessages,

    /// Decimals printed for results with a fractional part.
    pub fraction_digits: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            messages: ErrorMessages::default(),
            fraction_digits: 2,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document.
    ///
    /// Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        match settings.validate() {
            Validation::Success(_) => Ok(settings),
            Validation::Failure(violations) => Err(SettingsError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<SettingsViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<SettingsViolation>>> = Vec::new();

        for (field, text) in self.messages.entries() {
            let check = if text.trim().is_empty() {
                Validation::fail(SettingsViolation::BlankMessage { field })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        let check = if self.fraction_digits > MAX_FRACTION_DIGITS {
            Validation::fail(SettingsViolation::FractionDigitsOutOfRange {
                found: self.fraction_digits,
                max: MAX_FRACTION_DIGITS,
            })
        } else {
            Validation::success(())
        };
        checks.push(check);

        Validation::all_vec(checks).map(|_| ())
    }
}
