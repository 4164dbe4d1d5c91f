//! Expression engine.
//!
//! Pure functions over flat string token streams:
//! - [`convert_infix_to_postfix`]: Dijkstra's shunting-yard algorithm
//! - [`evaluate_postfix`]: stack evaluation of reverse Polish notation
//! - [`format_result`]: rendering of an evaluated value
//!
//! Operator symbols are the keypad symbols (`+ - × ÷`). Negative numbers are
//! single signed tokens (`-5`), never bracketed sub-expressions.

mod error;
mod format;
mod rpn;

pub use error::EvaluationError;
pub use format::format_result;
pub use rpn::{convert_infix_to_postfix, evaluate_postfix};
