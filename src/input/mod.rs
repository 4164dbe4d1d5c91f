//! Input events from the keypad.
//!
//! Every button carries a fixed `(category, symbol)` pair. An [`InputEvent`]
//! is that pair as delivered by the host; [`InputEvent::key`] resolves it into
//! a typed [`Key`] the calculator can act on.

mod error;
mod event;

pub use error::InputError;
pub use event::{Action, Category, InputEvent, Key, CLEAR, DECIMAL_POINT, EVALUATE, SIGN_FLIP};
