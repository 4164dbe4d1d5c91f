//! Keypad Session
//!
//! This example replays button presses through a calculator session and
//! prints the three display channels after each press.
//!
//! Key concepts:
//! - Button labels resolve to `(category, symbol)` input events
//! - Rejected presses leave the expression untouched and set the error channel
//! - `=` evaluates and resets the state, `C` clears everything
//!
//! Run with: cargo run --example keypad_session -- 3 + 5 × ( 2 - 8 ) =

use keypad_calc::input::InputEvent;
use keypad_calc::session::Calculator;
use keypad_calc::settings::Settings;

fn main() {
    let labels: Vec<String> = std::env::args().skip(1).collect();
    let labels = if labels.is_empty() {
        ["7", "÷", "2", "=", "+", "(", "1", ",", ",", "5", ")", "="]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        labels
    };

    println!("=== Keypad Session Example ===\n");

    let mut calculator = Calculator::new(Settings::default());
    for label in &labels {
        let event = match InputEvent::from_label(label) {
            Ok(event) => event,
            Err(err) => {
                println!("{label:>3}  skipped: {err}");
                continue;
            }
        };

        let outcome = calculator.press(&event);
        let display = calculator.display();
        println!(
            "{label:>3}  equation: {:<20} result: {:<8} error: {}  ({:?})",
            display.equation(),
            display.result().unwrap_or(""),
            display.error().unwrap_or(""),
            outcome,
        );
    }
}
