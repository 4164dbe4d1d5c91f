//! Input resolution errors.

use super::event::Category;
use thiserror::Error;

/// An event whose pair names no key on the keypad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown symbol '{symbol}' for category {category:?}")]
    UnknownSymbol { category: Category, symbol: String },

    #[error("No button is labelled '{0}'")]
    UnknownLabel(String),
}
