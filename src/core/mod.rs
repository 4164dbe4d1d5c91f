//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Expression tokens and their display/engine forms
//! - The admissible-input rule
//! - The calculator state value and its transition functions
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy. The owning session lives in
//! [`crate::session`].

mod admissible;
mod error;
mod state;
mod token;
mod transition;

pub use admissible::{derive_allowed, Admissible, AllowedSet, Pending};
pub use error::CalcError;
pub use state::CalculatorState;
pub use token::{Operand, Operator, Sign, Token, TokenKind};
pub use transition::{apply_input, evaluate, reset, EditKey};
