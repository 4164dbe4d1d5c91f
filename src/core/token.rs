//! Tokens of an expression under construction.
//!
//! A finalized expression is a sequence of [`Token`] values. Each token has two
//! linear forms: the display form shown on the equation channel, and the
//! flattened form handed to the expression engine. The two differ only for
//! negative operands, which display as `(-5)` but flatten to the single signed
//! numeric token `-5`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operator available on the keypad.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol printed on the button and used in token streams.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Resolve a token or button symbol.
    ///
    /// ASCII `*` and `/` are accepted as aliases for `×` and `÷`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Binding strength: additive operators bind looser than multiplicative ones.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Compute `a OP b` with plain floating point semantics.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Sign applied to an operand when it is finalized.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// The opposite sign.
    pub fn flip(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// `1` or `-1`.
    pub fn factor(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

/// A completed numeric operand: the typed digits (with at most one `.`) and a sign.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Operand {
    digits: String,
    sign: Sign,
}

impl Operand {
    pub fn new(digits: impl Into<String>, sign: Sign) -> Self {
        Self {
            digits: digits.into(),
            sign,
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// `N` when positive, `(-N)` when negative.
    pub fn display(&self) -> String {
        format_display(&self.digits, self.sign)
    }

    /// `N` when positive, `-N` when negative.
    pub fn flattened(&self) -> String {
        format_flattened(&self.digits, self.sign)
    }
}

pub(crate) fn format_display(digits: &str, sign: Sign) -> String {
    match sign {
        Sign::Positive => digits.to_string(),
        Sign::Negative => format!("(-{digits})"),
    }
}

pub(crate) fn format_flattened(digits: &str, sign: Sign) -> String {
    match sign {
        Sign::Positive => digits.to_string(),
        Sign::Negative => format!("-{digits}"),
    }
}

/// One finalized element of an expression.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Token {
    Operand(Operand),
    Operator(Operator),
    OpenBracket,
    CloseBracket,
}

/// Token kind without payload, used by the admissibility rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Operand,
    Operator,
    OpenBracket,
    CloseBracket,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Operand(_) => TokenKind::Operand,
            Self::Operator(_) => TokenKind::Operator,
            Self::OpenBracket => TokenKind::OpenBracket,
            Self::CloseBracket => TokenKind::CloseBracket,
        }
    }

    /// Text shown on the equation channel.
    pub fn display(&self) -> String {
        match self {
            Self::Operand(operand) => operand.display(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::OpenBracket => "(".to_string(),
            Self::CloseBracket => ")".to_string(),
        }
    }

    /// Text handed to the expression engine.
    ///
    /// Structural brackets survive; only the decorative wrapping of negative
    /// operands is removed.
    pub fn flattened(&self) -> String {
        match self {
            Self::Operand(operand) => operand.flattened(),
            other => other.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("^"), None);
    }

    #[test]
    fn multiplicative_operators_bind_tighter() {
        assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Subtract.precedence());
        assert_eq!(Operator::Multiply.precedence(), Operator::Divide.precedence());
    }

    #[test]
    fn sign_flip_is_an_involution() {
        assert_eq!(Sign::Positive.flip(), Sign::Negative);
        assert_eq!(Sign::Positive.flip().flip(), Sign::Positive);
        assert_eq!(Sign::Negative.factor(), -1);
    }

    #[test]
    fn negative_operand_displays_wrapped_and_flattens_bare() {
        let operand = Operand::new("5.2", Sign::Negative);
        assert_eq!(operand.display(), "(-5.2)");
        assert_eq!(operand.flattened(), "-5.2");

        let positive = Operand::new("12", Sign::Positive);
        assert_eq!(positive.display(), "12");
        assert_eq!(positive.flattened(), "12");
    }

    #[test]
    fn brackets_survive_flattening() {
        assert_eq!(Token::OpenBracket.flattened(), "(");
        assert_eq!(Token::CloseBracket.flattened(), ")");
        assert_eq!(Token::Operator(Operator::Divide).flattened(), "÷");
    }
}
