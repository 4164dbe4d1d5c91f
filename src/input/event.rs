//! Input event types.

use super::error::InputError;
use crate::core::{EditKey, Operator};
use serde::{Deserialize, Serialize};

/// Button symbol for the decimal point.
pub const DECIMAL_POINT: &str = ",";
/// Button symbol for the sign flip.
pub const SIGN_FLIP: &str = "±";
/// Button symbol for clear.
pub const CLEAR: &str = "C";
/// Button symbol for evaluate.
pub const EVALUATE: &str = "=";

/// Button group an event comes from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    NumberDigit,
    Modifier,
    Operator,
    Action,
}

/// Terminal keys handled by the session rather than the transition function.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    Clear,
    Evaluate,
}

/// A resolved keystroke.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Key {
    Edit(EditKey),
    Action(Action),
}

/// Raw event delivered by the host for one button press.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct InputEvent {
    pub category: Category,
    pub symbol: String,
}

impl InputEvent {
    pub fn new(category: Category, symbol: impl Into<String>) -> Self {
        Self {
            category,
            symbol: symbol.into(),
        }
    }

    pub fn digit(digit: char) -> Self {
        Self::new(Category::NumberDigit, digit.to_string())
    }

    pub fn modifier(symbol: &str) -> Self {
        Self::new(Category::Modifier, symbol)
    }

    pub fn operator(symbol: &str) -> Self {
        Self::new(Category::Operator, symbol)
    }

    pub fn action(symbol: &str) -> Self {
        Self::new(Category::Action, symbol)
    }

    /// Event of the standard keypad button printed with `label`.
    ///
    /// ```
    /// use keypad_calc::input::{Category, InputEvent};
    ///
    /// let event = InputEvent::from_label("×").unwrap();
    /// assert_eq!(event.category, Category::Operator);
    /// assert!(InputEvent::from_label("^").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self, InputError> {
        let category = match label {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => Category::NumberDigit,
            "," | "." | SIGN_FLIP => Category::Modifier,
            "(" | ")" => Category::Operator,
            CLEAR | EVALUATE => Category::Action,
            other if Operator::from_symbol(other).is_some() => Category::Operator,
            other => return Err(InputError::UnknownLabel(other.to_string())),
        };
        Ok(Self::new(category, label))
    }

    /// Resolve the `(category, symbol)` pair into a key.
    pub fn key(&self) -> Result<Key, InputError> {
        let symbol = self.symbol.as_str();
        let key = match self.category {
            Category::NumberDigit => single_digit(symbol).map(|d| Key::Edit(EditKey::Digit(d))),
            Category::Modifier => match symbol {
                "," | "." => Some(Key::Edit(EditKey::DecimalPoint)),
                SIGN_FLIP => Some(Key::Edit(EditKey::SignFlip)),
                _ => None,
            },
            Category::Operator => match symbol {
                "(" => Some(Key::Edit(EditKey::OpenBracket)),
                ")" => Some(Key::Edit(EditKey::CloseBracket)),
                other => Operator::from_symbol(other).map(|op| Key::Edit(EditKey::Operator(op))),
            },
            Category::Action => match symbol {
                CLEAR => Some(Key::Action(Action::Clear)),
                EVALUATE => Some(Key::Action(Action::Evaluate)),
                _ => None,
            },
        };
        key.ok_or_else(|| InputError::UnknownSymbol {
            category: self.category,
            symbol: self.symbol.clone(),
        })
    }
}

fn single_digit(symbol: &str) -> Option<char> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}
