//! Calculator state.
//!
//! [`CalculatorState`] is a value: transitions in [`super::transition`] read
//! one state and return a fresh one. Nothing outside this module can change
//! its fields, so the cached admissible set always agrees with the rest.

use super::admissible::{derive_allowed, Admissible, AllowedSet, Pending};
use super::token::{format_display, format_flattened, Operand, Sign, Token, TokenKind};
use serde::{Deserialize, Serialize};

/// The expression under construction.
///
/// Deserializing keeps only the typed content; the bracket count, decimal
/// flag and admissible set are derived again from it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(from = "StateRecord")]
pub struct CalculatorState {
    current_number: String,
    current_sign: Sign,
    has_decimal_point: bool,
    open_brackets: usize,
    allowed_next: AllowedSet,
    tokens: Vec<Token>,
}

/// Serialized form of [`CalculatorState`] that is trusted on load.
#[derive(Deserialize)]
struct StateRecord {
    #[serde(default)]
    current_number: String,
    #[serde(default)]
    current_sign: Sign,
    #[serde(default)]
    tokens: Vec<Token>,
}

impl From<StateRecord> for CalculatorState {
    fn from(record: StateRecord) -> Self {
        let open_brackets = record.tokens.iter().fold(0usize, |open, token| match token.kind() {
            TokenKind::OpenBracket => open + 1,
            TokenKind::CloseBracket => open.saturating_sub(1),
            TokenKind::Operand | TokenKind::Operator => open,
        });
        let mut state = Self {
            has_decimal_point: record.current_number.contains('.'),
            current_number: record.current_number,
            current_sign: record.current_sign,
            open_brackets,
            allowed_next: AllowedSet::empty(),
            tokens: record.tokens,
        };
        state.refresh_allowed();
        state
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The empty state: nothing typed, positive sign, no brackets.
    pub fn new() -> Self {
        let mut state = Self {
            current_number: String::new(),
            current_sign: Sign::Positive,
            has_decimal_point: false,
            open_brackets: 0,
            allowed_next: AllowedSet::empty(),
            tokens: Vec::new(),
        };
        state.refresh_allowed();
        state
    }

    /// Digits (and at most one `.`) typed since the last finalized token.
    pub fn current_number(&self) -> &str {
        &self.current_number
    }

    pub fn current_sign(&self) -> Sign {
        self.current_sign
    }

    pub fn has_decimal_point(&self) -> bool {
        self.has_decimal_point
    }

    /// Number of `(` not yet matched by a `)`.
    pub fn open_brackets(&self) -> usize {
        self.open_brackets
    }

    pub fn allowed_next(&self) -> AllowedSet {
        self.allowed_next
    }

    pub fn allows(&self, item: Admissible) -> bool {
        self.allowed_next.contains(item)
    }

    /// Finalized operands, operators and brackets in entry order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn has_pending_operand(&self) -> bool {
        !self.current_number.is_empty()
    }

    /// True when nothing has been entered at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.current_number.is_empty()
    }

    /// Recompute the admissible set from the other fields.
    pub fn derived_allowed(&self) -> AllowedSet {
        derive_allowed(
            Pending::of(&self.current_number),
            self.has_decimal_point,
            self.open_brackets,
            self.tokens.last().map(Token::kind),
        )
    }

    /// Expression as shown on the equation channel.
    ///
    /// Finalized tokens followed by the pending operand, which renders as `N`
    /// or `(-N)`.
    pub fn render_equation(&self) -> String {
        let mut equation: String = self.tokens.iter().map(Token::display).collect();
        equation.push_str(&format_display(&self.current_number, self.current_sign));
        equation
    }

    /// Flattened infix token stream handed to the expression engine.
    ///
    /// Negative operands lose their decorative wrapping (`(-5)` becomes `-5`);
    /// structural brackets are kept.
    pub fn render_postfix_source(&self) -> Vec<String> {
        let mut items: Vec<String> = self.tokens.iter().map(Token::flattened).collect();
        if self.has_pending_operand() {
            items.push(format_flattened(&self.current_number, self.current_sign));
        }
        items
    }

    pub(crate) fn push_digit(&mut self, digit: char) {
        self.current_number.push(digit);
    }

    pub(crate) fn push_decimal_point(&mut self) {
        self.current_number.push('.');
        self.has_decimal_point = true;
    }

    pub(crate) fn flip_sign(&mut self) {
        self.current_sign = self.current_sign.flip();
    }

    /// Close the pending operand, if any, and append it to the tokens.
    pub(crate) fn finalize_operand(&mut self) {
        if self.current_number.is_empty() {
            return;
        }
        let digits = std::mem::take(&mut self.current_number);
        self.tokens
            .push(Token::Operand(Operand::new(digits, self.current_sign)));
        self.current_sign = Sign::Positive;
        self.has_decimal_point = false;
    }

    pub(crate) fn push_token(&mut self, token: Token) {
        match token.kind() {
            TokenKind::OpenBracket => self.open_brackets += 1,
            TokenKind::CloseBracket => self.open_brackets = self.open_brackets.saturating_sub(1),
            TokenKind::Operand | TokenKind::Operator => {}
        }
        self.tokens.push(token);
    }

    pub(crate) fn refresh_allowed(&mut self) {
        self.allowed_next = self.derived_allowed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::Operator;

    #[test]
    fn new_state_is_empty() {
        let state = CalculatorState::new();
        assert!(state.is_empty());
        assert_eq!(state.current_number(), "");
        assert_eq!(state.current_sign(), Sign::Positive);
        assert!(!state.has_decimal_point());
        assert_eq!(state.open_brackets(), 0);
        assert_eq!(
            state.allowed_next(),
            AllowedSet::of(&[Admissible::Number, Admissible::OpenBracket])
        );
        assert_eq!(state.render_equation(), "");
        assert!(state.render_postfix_source().is_empty());
    }

    #[test]
    fn finalize_moves_pending_operand_into_tokens() {
        let mut state = CalculatorState::new();
        state.push_digit('4');
        state.push_decimal_point();
        state.push_digit('2');
        state.flip_sign();
        state.finalize_operand();

        assert_eq!(
            state.tokens(),
            &[Token::Operand(Operand::new("4.2", Sign::Negative))]
        );
        assert!(!state.has_pending_operand());
        assert!(!state.has_decimal_point());
        assert_eq!(state.current_sign(), Sign::Positive);
    }

    #[test]
    fn finalize_without_pending_operand_is_a_no_op() {
        let mut state = CalculatorState::new();
        state.flip_sign();
        state.finalize_operand();
        assert!(state.tokens().is_empty());
    }

    #[test]
    fn bracket_tokens_track_open_count() {
        let mut state = CalculatorState::new();
        state.push_token(Token::OpenBracket);
        state.push_token(Token::OpenBracket);
        state.push_token(Token::CloseBracket);
        assert_eq!(state.open_brackets(), 1);
    }

    #[test]
    fn negative_operands_render_differently_for_display_and_engine() {
        let mut state = CalculatorState::new();
        state.push_token(Token::OpenBracket);
        state.push_digit('5');
        state.flip_sign();
        state.finalize_operand();
        state.push_token(Token::Operator(Operator::Multiply));
        state.push_digit('2');
        state.flip_sign();

        assert_eq!(state.render_equation(), "((-5)×(-2)");
        assert_eq!(
            state.render_postfix_source(),
            vec!["(", "-5", "×", "-2"]
        );
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = CalculatorState::new();
        state.push_digit('7');
        state.refresh_allowed();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn deserialized_state_recomputes_cached_fields() {
        let mut state = CalculatorState::new();
        state.push_token(Token::OpenBracket);
        state.push_digit('3');
        state.push_decimal_point();
        state.refresh_allowed();

        let mut value = serde_json::to_value(&state).unwrap();
        value["open_brackets"] = serde_json::json!(0);
        value["has_decimal_point"] = serde_json::json!(false);
        value["allowed_next"] = serde_json::json!(u8::MAX);

        let deserialized: CalculatorState = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized.open_brackets(), 1);
        assert!(deserialized.has_decimal_point());
        assert_eq!(deserialized.allowed_next(), deserialized.derived_allowed());
        assert_eq!(deserialized, state);
    }
}
