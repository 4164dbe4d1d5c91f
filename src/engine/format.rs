//! Result formatting for the result channel.

/// Format an evaluated value.
///
/// Values with a fractional part are printed with `fraction_digits` decimals,
/// integral values with none. Negative zero prints as `0`.
///
/// ```
/// use keypad_calc::engine::format_result;
///
/// assert_eq!(format_result(3.5, 2), "3.50");
/// assert_eq!(format_result(-15.0, 2), "-15");
/// ```
pub fn format_result(value: f64, fraction_digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() != 0.0 {
        format!("{value:.fraction_digits$}")
    } else {
        format!("{value:.0}")
    }
}
