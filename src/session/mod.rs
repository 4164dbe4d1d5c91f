//! The imperative shell around the pure core.
//!
//! A [`Calculator`] owns the single live state of one calculator session. It
//! routes each input event either to the pure transition function or to the
//! clear/evaluate actions, and pushes the outcome to a [`Display`].

mod display;
mod machine;

pub use display::{Display, Panel};
pub use machine::{Calculator, StepResult};
