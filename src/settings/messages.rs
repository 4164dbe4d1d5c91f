//! User-facing texts for each grammar violation.

use crate::core::CalcError;
use serde::{Deserialize, Serialize};

/// One message per [`CalcError`] kind.
///
/// Missing fields fall back to the English defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub expected_number: String,
    pub sign_change_not_allowed: String,
    pub decimal_point_already_placed: String,
    pub open_bracket_not_allowed: String,
    pub close_bracket_not_allowed: String,
    pub operator_not_allowed: String,
    pub unbalanced_brackets: String,
    pub invalid_expression: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            expected_number: CalcError::ExpectedNumber.to_string(),
            sign_change_not_allowed: CalcError::SignChangeNotAllowed.to_string(),
            decimal_point_already_placed: CalcError::DecimalPointAlreadyPlaced.to_string(),
            open_bracket_not_allowed: CalcError::OpenBracketNotAllowed.to_string(),
            close_bracket_not_allowed: CalcError::CloseBracketNotAllowed.to_string(),
            operator_not_allowed: CalcError::OperatorNotAllowed.to_string(),
            unbalanced_brackets: CalcError::UnbalancedBrackets.to_string(),
            invalid_expression: CalcError::InvalidExpression.to_string(),
        }
    }
}

impl ErrorMessages {
    /// Text shown on the error channel for `error`.
    pub fn message_for(&self, error: CalcError) -> &str {
        match error {
            CalcError::ExpectedNumber => self.expected_number.as_str(),
            CalcError::SignChangeNotAllowed => self.sign_change_not_allowed.as_str(),
            CalcError::DecimalPointAlreadyPlaced => self.decimal_point_already_placed.as_str(),
            CalcError::OpenBracketNotAllowed => self.open_bracket_not_allowed.as_str(),
            CalcError::CloseBracketNotAllowed => self.close_bracket_not_allowed.as_str(),
            CalcError::OperatorNotAllowed => self.operator_not_allowed.as_str(),
            CalcError::UnbalancedBrackets => self.unbalanced_brackets.as_str(),
            CalcError::InvalidExpression => self.invalid_expression.as_str(),
        }
    }

    /// Field name and text for every message, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("expected_number", self.expected_number.as_str()),
            ("sign_change_not_allowed", self.sign_change_not_allowed.as_str()),
            ("decimal_point_already_placed", self.decimal_point_already_placed.as_str()),
            ("open_bracket_not_allowed", self.open_bracket_not_allowed.as_str()),
            ("close_bracket_not_allowed", self.close_bracket_not_allowed.as_str()),
            ("operator_not_allowed", self.operator_not_allowed.as_str()),
            ("unbalanced_brackets", self.unbalanced_brackets.as_str()),
            ("invalid_expression", self.invalid_expression.as_str()),
        ]
    }
}
