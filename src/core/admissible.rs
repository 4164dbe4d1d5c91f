//! The admissible-input rule.
//!
//! After every transition the set of inputs the grammar accepts next is
//! recomputed by [`derive_allowed`], a pure function of the scalar shape of the
//! state. Handlers never edit the set by hand.

use super::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of input the grammar may admit next.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Admissible {
    Number,
    Sign,
    DecimalPoint,
    OpenBracket,
    CloseBracket,
    Operator,
}

impl Admissible {
    pub const ALL: [Admissible; 6] = [
        Admissible::Number,
        Admissible::Sign,
        Admissible::DecimalPoint,
        Admissible::OpenBracket,
        Admissible::CloseBracket,
        Admissible::Operator,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Small set of [`Admissible`] values.
#[derive(Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedSet(u8);

impl AllowedSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn of(items: &[Admissible]) -> Self {
        items.iter().fold(Self::empty(), |set, item| set.with(*item))
    }

    /// Return a copy with `item` added.
    pub fn with(self, item: Admissible) -> Self {
        Self(self.0 | item.bit())
    }

    /// Return a copy with `item` added when `condition` holds.
    pub fn with_if(self, item: Admissible, condition: bool) -> Self {
        if condition {
            self.with(item)
        } else {
            self
        }
    }

    pub fn contains(&self, item: Admissible) -> bool {
        self.0 & item.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Admissible> + '_ {
        Admissible::ALL
            .into_iter()
            .filter(move |item| self.contains(*item))
    }
}

impl fmt::Debug for AllowedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Shape of the operand currently being typed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pending {
    /// Nothing typed since the last finalized token.
    None,
    /// Digits typed, last character is a digit.
    Digits,
    /// Last character typed is the decimal point; a digit must follow.
    TrailingPoint,
}

impl Pending {
    pub fn of(current_number: &str) -> Self {
        if current_number.is_empty() {
            Self::None
        } else if current_number.ends_with('.') {
            Self::TrailingPoint
        } else {
            Self::Digits
        }
    }
}

/// Compute the admissible next inputs.
///
/// | pending        | Number | Sign | Point         | `(`            | `)`            | Operator        |
/// |----------------|--------|------|---------------|----------------|----------------|-----------------|
/// | none           | unless after `)` | no | no  | unless after `)` | brackets > 0 | only after `)` |
/// | digits         | yes    | yes  | unless placed | no             | brackets > 0   | yes             |
/// | trailing point | yes    | yes  | no            | no             | no             | no              |
///
/// A closed bracket group behaves like a finished operand: it can be followed
/// by an operator or another `)`, never by a digit or a new `(`.
pub fn derive_allowed(
    pending: Pending,
    has_decimal_point: bool,
    open_brackets: usize,
    last: Option<TokenKind>,
) -> AllowedSet {
    let brackets_open = open_brackets > 0;
    match pending {
        Pending::None => {
            let after_group = last == Some(TokenKind::CloseBracket);
            AllowedSet::empty()
                .with_if(Admissible::Number, !after_group)
                .with_if(Admissible::OpenBracket, !after_group)
                .with_if(Admissible::CloseBracket, brackets_open)
                .with_if(Admissible::Operator, after_group)
        }
        Pending::Digits => AllowedSet::of(&[
            Admissible::Number,
            Admissible::Sign,
            Admissible::Operator,
        ])
        .with_if(Admissible::DecimalPoint, !has_decimal_point)
        .with_if(Admissible::CloseBracket, brackets_open),
        Pending::TrailingPoint => AllowedSet::of(&[Admissible::Number, Admissible::Sign]),
    }
}
