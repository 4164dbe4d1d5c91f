//! Calculator session that owns the live state and drives a display.

use crate::core::{apply_input, evaluate, reset, CalcError, CalculatorState, EditKey};
use crate::engine::format_result;
use crate::input::{Action, InputEvent, Key};
use crate::session::display::{Display, Panel};
use crate::settings::Settings;
use tracing::{debug, warn};

/// Result of processing a single input event
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// Edit accepted, the equation channel shows the new expression
    Accepted,

    /// Expression evaluated and the state reset
    Evaluated { value: f64, formatted: String },

    /// State and every channel cleared
    Cleared,

    /// Event had no effect
    Ignored,
}

/// A calculator session.
///
/// Holds the single live [`CalculatorState`] and replaces it wholesale on
/// every accepted transition. Rejected input leaves it untouched and shows the
/// configured message on the error channel.
pub struct Calculator<D: Display = Panel> {
    settings: Settings,
    current: CalculatorState,
    display: D,
}

impl Calculator<Panel> {
    /// Create a session backed by an in-memory [`Panel`].
    pub fn new(settings: Settings) -> Self {
        Self::with_display(settings, Panel::new())
    }
}

impl Default for Calculator<Panel> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<D: Display> Calculator<D> {
    /// Create a session driving `display`, which is cleared first.
    pub fn with_display(settings: Settings, mut display: D) -> Self {
        display.reset();
        Self {
            settings,
            current: reset(),
            display,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &CalculatorState {
        &self.current
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Process one raw event from the keypad.
    ///
    /// Events that resolve to no key are ignored.
    pub fn press(&mut self, event: &InputEvent) -> Result<StepResult, CalcError> {
        debug!(category = ?event.category, symbol = %event.symbol, "input");
        match event.key() {
            Ok(key) => self.press_key(key),
            Err(err) => {
                warn!(error = %err, "ignoring input event");
                Ok(StepResult::Ignored)
            }
        }
    }

    /// Process one resolved key.
    pub fn press_key(&mut self, key: Key) -> Result<StepResult, CalcError> {
        match key {
            Key::Action(Action::Clear) => Ok(self.clear()),
            Key::Action(Action::Evaluate) => self.evaluate(),
            Key::Edit(edit) => self.edit(edit),
        }
    }

    fn clear(&mut self) -> StepResult {
        self.display.reset();
        self.current = reset();
        debug!("cleared");
        StepResult::Cleared
    }

    fn evaluate(&mut self) -> Result<StepResult, CalcError> {
        if self.current.is_empty() {
            debug!("nothing to evaluate");
            return Ok(StepResult::Ignored);
        }

        match evaluate(&self.current) {
            Ok(value) => {
                let formatted = format_result(value, self.settings.fraction_digits);
                debug!(value, formatted = %formatted, "evaluated");
                self.display.set_error(None);
                self.display.set_result(Some(&formatted));
                self.current = reset();
                Ok(StepResult::Evaluated { value, formatted })
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    fn edit(&mut self, key: EditKey) -> Result<StepResult, CalcError> {
        let starts_expression = self.current.is_empty();
        let next = apply_input(&self.current, key).map_err(|err| self.reject(err))?;

        if starts_expression {
            self.display.set_result(None);
        }
        self.current = next;
        debug!(state = ?self.current, "state changed");
        self.display.set_equation(&self.current.render_equation());
        self.display.set_error(None);
        Ok(StepResult::Accepted)
    }

    fn reject(&mut self, err: CalcError) -> CalcError {
        debug!(error = ?err, "input rejected");
        self.display
            .set_error(Some(self.settings.messages.message_for(err)));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_labels(calculator: &mut Calculator, labels: &[&str]) -> Vec<Result<StepResult, CalcError>> {
        labels
            .iter()
            .map(|label| {
                let event = InputEvent::from_label(label).unwrap();
                calculator.press(&event)
            })
            .collect()
    }

    #[test]
    fn accepted_input_updates_equation_and_clears_error() {
        let mut calculator = Calculator::default();
        press_labels(&mut calculator, &["+"]);
        assert!(calculator.display().error().is_some());

        press_labels(&mut calculator, &["1", "2"]);
        assert_eq!(calculator.display().equation(), "12");
        assert_eq!(calculator.display().error(), None);
    }

    #[test]
    fn rejected_input_shows_configured_message() {
        let mut settings = Settings::default();
        settings.messages.operator_not_allowed = "сейчас нельзя ввести оператор".to_string();
        let mut calculator = Calculator::new(settings);

        let results = press_labels(&mut calculator, &["×"]);
        assert_eq!(results, vec![Err(CalcError::OperatorNotAllowed)]);
        assert_eq!(
            calculator.display().error(),
            Some("сейчас нельзя ввести оператор")
        );
        assert!(calculator.current_state().is_empty());
    }

    #[test]
    fn evaluation_resets_state_and_finalizes_result() {
        let mut calculator = Calculator::default();
        let results = press_labels(&mut calculator, &["7", "÷", "2", "="]);

        assert_eq!(
            results.last(),
            Some(&Ok(StepResult::Evaluated {
                value: 3.5,
                formatted: "3.50".to_string()
            }))
        );
        assert!(calculator.current_state().is_empty());
        assert_eq!(calculator.display().equation(), "7÷2");
        assert_eq!(calculator.display().result(), Some("3.50"));
        assert!(calculator.display().is_calculated());
    }

    #[test]
    fn failed_evaluation_preserves_state() {
        let mut calculator = Calculator::default();
        press_labels(&mut calculator, &["1", "÷", "0"]);
        let before = calculator.current_state().clone();

        let results = press_labels(&mut calculator, &["="]);
        assert_eq!(results, vec![Err(CalcError::InvalidExpression)]);
        assert_eq!(calculator.current_state(), &before);
        assert_eq!(calculator.display().equation(), "1÷0");
        assert_eq!(calculator.display().result(), None);
        assert_eq!(
            calculator.display().error(),
            Some(CalcError::InvalidExpression.to_string().as_str())
        );
    }

    #[test]
    fn evaluate_on_empty_expression_is_ignored() {
        let mut calculator = Calculator::default();
        let results = press_labels(&mut calculator, &["="]);
        assert_eq!(results, vec![Ok(StepResult::Ignored)]);
        assert_eq!(calculator.display(), &Panel::new());
    }

    #[test]
    fn new_expression_clears_previous_result() {
        let mut calculator = Calculator::default();
        press_labels(&mut calculator, &["2", "+", "2", "="]);
        assert_eq!(calculator.display().result(), Some("4"));

        press_labels(&mut calculator, &["5"]);
        assert_eq!(calculator.display().result(), None);
        assert_eq!(calculator.display().equation(), "5");
        assert!(!calculator.display().is_calculated());
    }

    #[test]
    fn unknown_events_are_ignored() {
        let mut calculator = Calculator::default();
        press_labels(&mut calculator, &["4"]);
        let before = calculator.current_state().clone();

        let result = calculator.press(&InputEvent::modifier("%"));
        assert_eq!(result, Ok(StepResult::Ignored));
        assert_eq!(calculator.current_state(), &before);
    }

    #[test]
    fn custom_display_receives_updates() {
        #[derive(Default)]
        struct Recorder {
            equations: Vec<String>,
        }

        impl Display for Recorder {
            fn set_error(&mut self, _message: Option<&str>) {}

            fn set_equation(&mut self, equation: &str) {
                self.equations.push(equation.to_string());
            }

            fn set_result(&mut self, _result: Option<&str>) {}
        }

        let mut calculator = Calculator::with_display(Settings::default(), Recorder::default());
        for label in ["1", "±", "+", "2"] {
            calculator
                .press(&InputEvent::from_label(label).unwrap())
                .unwrap();
        }

        let recorder = calculator.into_display();
        assert_eq!(recorder.equations, vec!["", "1", "(-1)", "(-1)+", "(-1)+2"]);
    }
}
