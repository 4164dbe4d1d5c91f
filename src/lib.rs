//! Keypad Calc: a pure functional on-screen calculator core
//!
//! The calculator assembles an arithmetic expression one button press at a
//! time. Every keystroke is checked against the grammar before it is accepted,
//! and the finished expression is evaluated through infix-to-postfix
//! conversion and a postfix stack evaluator.
//!
//! # Layout
//!
//! - [`core`](crate::core): calculator state, admissible-input rule, pure transitions
//! - [`engine`]: shunting-yard conversion, postfix evaluation, result formatting
//! - [`input`]: keypad events and their resolution into keys
//! - [`session`]: the owning session that drives the output channels
//! - [`settings`]: error texts and formatting options
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::input::InputEvent;
//! use keypad_calc::session::{Calculator, StepResult};
//!
//! let mut calculator = Calculator::default();
//! for label in ["7", "÷", "2"] {
//!     calculator.press(&InputEvent::from_label(label).unwrap()).unwrap();
//! }
//! assert_eq!(calculator.display().equation(), "7÷2");
//!
//! let result = calculator.press(&InputEvent::action("=")).unwrap();
//! assert!(matches!(result, StepResult::Evaluated { .. }));
//! assert_eq!(calculator.display().result(), Some("3.50"));
//! ```

pub mod core;
pub mod engine;
pub mod input;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{apply_input, reset, CalcError, CalculatorState, EditKey};
pub use input::{Category, InputEvent};
pub use session::{Calculator, Display, Panel, StepResult};
pub use settings::Settings;
