//! Output channels driven by the calculator session.

/// The three text channels a host renders.
///
/// Implement this for the real screen; [`Panel`] keeps the channels in memory.
pub trait Display {
    /// Set the error text, or clear it with `None`.
    fn set_error(&mut self, message: Option<&str>);

    /// Set the equation text.
    fn set_equation(&mut self, equation: &str);

    /// Set the result text, or clear it with `None`.
    ///
    /// A present result marks the calculation as finalized.
    fn set_result(&mut self, result: Option<&str>);

    /// Clear every channel.
    fn reset(&mut self) {
        self.set_error(None);
        self.set_equation("");
        self.set_result(None);
    }
}

/// In-memory display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Panel {
    error: Option<String>,
    equation: String,
    result: Option<String>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Whether the shown equation is a completed calculation.
    pub fn is_calculated(&self) -> bool {
        self.result.is_some()
    }
}

impl Display for Panel {
    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
    }

    fn set_equation(&mut self, equation: &str) {
        self.equation = equation.to_string();
    }

    fn set_result(&mut self, result: Option<&str>) {
        self.result = result.map(str::to_string);
    }
}
