//! Expression engine errors.

use thiserror::Error;

/// Errors that can occur while evaluating a postfix token stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Token '{0}' is neither a number nor an operator")]
    UnknownToken(String),

    #[error("Operator '{operator}' is missing an operand")]
    MissingOperand { operator: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Operator '{operator}' produced a non-finite value")]
    NonFiniteResult { operator: String },

    #[error("Expected exactly one value after evaluation, found {count}")]
    LeftoverValues { count: usize },
}
