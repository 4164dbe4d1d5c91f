//! Grammar violations reported by the calculator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an input or an evaluation was refused.
///
/// One kind per grammar rule. The `Display` text is only a fallback: the
/// message shown to the user comes from [`crate::settings::ErrorMessages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum CalcError {
    #[error("a number is expected")]
    ExpectedNumber,

    #[error("the sign cannot be changed now")]
    SignChangeNotAllowed,

    #[error("the decimal point is already placed")]
    DecimalPointAlreadyPlaced,

    #[error("a bracket cannot be opened now")]
    OpenBracketNotAllowed,

    #[error("a bracket cannot be closed now")]
    CloseBracketNotAllowed,

    #[error("an operator cannot be entered now")]
    OperatorNotAllowed,

    #[error("a bracket is not closed")]
    UnbalancedBrackets,

    #[error("the expression is invalid")]
    InvalidExpression,
}

impl CalcError {
    pub const ALL: [CalcError; 8] = [
        CalcError::ExpectedNumber,
        CalcError::SignChangeNotAllowed,
        CalcError::DecimalPointAlreadyPlaced,
        CalcError::OpenBracketNotAllowed,
        CalcError::CloseBracketNotAllowed,
        CalcError::OperatorNotAllowed,
        CalcError::UnbalancedBrackets,
        CalcError::InvalidExpression,
    ];
}
