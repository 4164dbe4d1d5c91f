//! Pure transition functions.
//!
//! Every handler validates the key against the admissible set of the incoming
//! state first. On failure the incoming state is untouched and the grammar
//! rule that refused the key is returned; on success a new state is returned.

use super::admissible::Admissible;
use super::error::CalcError;
use super::state::CalculatorState;
use super::token::{Operator, Token};
use crate::engine;
use serde::{Deserialize, Serialize};

/// A keystroke that edits the expression.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EditKey {
    Digit(char),
    SignFlip,
    DecimalPoint,
    OpenBracket,
    CloseBracket,
    Operator(Operator),
}

impl EditKey {
    /// What the grammar must admit for this key to be accepted.
    pub fn requirement(self) -> Admissible {
        match self {
            Self::Digit(_) => Admissible::Number,
            Self::SignFlip => Admissible::Sign,
            Self::DecimalPoint => Admissible::DecimalPoint,
            Self::OpenBracket => Admissible::OpenBracket,
            Self::CloseBracket => Admissible::CloseBracket,
            Self::Operator(_) => Admissible::Operator,
        }
    }

    /// Error reported when the requirement is not admitted.
    pub fn rejection(self) -> CalcError {
        match self {
            Self::Digit(_) => CalcError::ExpectedNumber,
            Self::SignFlip => CalcError::SignChangeNotAllowed,
            Self::DecimalPoint => CalcError::DecimalPointAlreadyPlaced,
            Self::OpenBracket => CalcError::OpenBracketNotAllowed,
            Self::CloseBracket => CalcError::CloseBracketNotAllowed,
            Self::Operator(_) => CalcError::OperatorNotAllowed,
        }
    }
}

/// The canonical empty state.
pub fn reset() -> CalculatorState {
    CalculatorState::new()
}

/// Apply one editing keystroke.
pub fn apply_input(state: &CalculatorState, key: EditKey) -> Result<CalculatorState, CalcError> {
    if !state.allows(key.requirement()) {
        return Err(key.rejection());
    }
    if let EditKey::Digit(digit) = key {
        if !digit.is_ascii_digit() {
            return Err(CalcError::ExpectedNumber);
        }
    }

    let mut next = state.clone();
    match key {
        EditKey::Digit(digit) => next.push_digit(digit),
        // The sign does not take part in admissibility.
        EditKey::SignFlip => {
            next.flip_sign();
            return Ok(next);
        }
        EditKey::DecimalPoint => next.push_decimal_point(),
        EditKey::OpenBracket => {
            next.finalize_operand();
            next.push_token(Token::OpenBracket);
        }
        EditKey::CloseBracket => {
            next.finalize_operand();
            next.push_token(Token::CloseBracket);
        }
        EditKey::Operator(op) => {
            next.finalize_operand();
            next.push_token(Token::Operator(op));
        }
    }
    next.refresh_allowed();
    Ok(next)
}

/// Evaluate the expression held by `state`.
///
/// Refuses with [`CalcError::UnbalancedBrackets`] while any `(` is open; any
/// engine failure becomes [`CalcError::InvalidExpression`]. The state itself is
/// never changed here, the caller decides whether to reset.
pub fn evaluate(state: &CalculatorState) -> Result<f64, CalcError> {
    if state.open_brackets() != 0 {
        return Err(CalcError::UnbalancedBrackets);
    }
    let infix = state.render_postfix_source();
    let postfix = engine::convert_infix_to_postfix(&infix);
    tracing::debug!(?postfix, "converted to postfix");
    engine::evaluate_postfix(&postfix).map_err(|err| {
        tracing::debug!(error = %err, "postfix evaluation failed");
        CalcError::InvalidExpression
    })
}
