//! Shunting-yard conversion and postfix evaluation.

use crate::core::Operator;
use crate::engine::error::EvaluationError;

/// Entry on the shunting-yard operator stack.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Stacked {
    OpenBracket,
    Operator(Operator),
}

impl Stacked {
    fn symbol(self) -> &'static str {
        match self {
            Self::OpenBracket => "(",
            Self::Operator(op) => op.symbol(),
        }
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Convert an infix token stream to postfix (reverse Polish) order.
///
/// Operators pop every stacked operator of greater or equal precedence before
/// being pushed, so equal-precedence chains associate to the left. Tokens that
/// are neither brackets nor operators are copied to the output unchanged; the
/// evaluator decides whether they are numbers.
///
/// A `)` without a matching `(` only flushes the stack. A `(` left open at the
/// end is emitted as is, which the evaluator then rejects.
///
/// ```
/// use keypad_calc::engine::convert_infix_to_postfix;
///
/// let postfix = convert_infix_to_postfix(&["3", "+", "5", "×", "(", "2", "-", "8", ")"]);
/// assert_eq!(postfix, vec!["3", "5", "2", "8", "-", "×", "+"]);
/// ```
pub fn convert_infix_to_postfix<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Stacked> = Vec::new();

    for token in tokens {
        let token: &str = token.as_ref();
        match token {
            "" => {}
            "(" => stack.push(Stacked::OpenBracket),
            ")" => {
                while let Some(top) = stack.pop() {
                    match top {
                        Stacked::OpenBracket => break,
                        Stacked::Operator(op) => output.push(op.symbol().to_string()),
                    }
                }
            }
            _ => match Operator::from_symbol(token) {
                Some(incoming) => {
                    while let Some(&Stacked::Operator(top)) = stack.last() {
                        if top.precedence() < incoming.precedence() {
                            break;
                        }
                        output.push(top.symbol().to_string());
                        stack.pop();
                    }
                    stack.push(Stacked::Operator(incoming));
                }
                None => output.push(token.to_string()),
            },
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top.symbol().to_string());
    }

    output
}

/// Evaluate a postfix token stream.
///
/// Numbers are pushed; an operator pops `b` then `a` and pushes `a OP b`.
/// Division by zero and non-finite intermediate values are reported as
/// errors rather than carried along as `inf`/`NaN`. Exactly one value must
/// remain at the end.
///
/// ```
/// use keypad_calc::engine::evaluate_postfix;
///
/// assert_eq!(evaluate_postfix(&["7", "2", "÷"]), Ok(3.5));
/// assert!(evaluate_postfix::<&str>(&[]).is_err());
/// ```
pub fn evaluate_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<f64, EvaluationError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        let token: &str = token.as_ref();
        if token.is_empty() {
            continue;
        }
        if let Some(value) = parse_number(token) {
            stack.push(value);
            continue;
        }

        let op = Operator::from_symbol(token)
            .ok_or_else(|| EvaluationError::UnknownToken(token.to_string()))?;
        let missing = || EvaluationError::MissingOperand {
            operator: token.to_string(),
        };
        let b = stack.pop().ok_or_else(missing)?;
        let a = stack.pop().ok_or_else(missing)?;

        if op == Operator::Divide && b == 0.0 {
            return Err(EvaluationError::DivisionByZero);
        }
        let value = op.apply(a, b);
        if !value.is_finite() {
            return Err(EvaluationError::NonFiniteResult {
                operator: token.to_string(),
            });
        }
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(EvaluationError::LeftoverValues { count: rest.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_precedence_and_brackets() {
        let postfix = convert_infix_to_postfix(&["3", "+", "5", "×", "(", "2", "-", "8", ")"]);
        assert_eq!(postfix, vec!["3", "5", "2", "8", "-", "×", "+"]);
    }

    #[test]
    fn equal_precedence_associates_left() {
        let postfix = convert_infix_to_postfix(&["8", "-", "3", "-", "2"]);
        assert_eq!(postfix, vec!["8", "3", "-", "2", "-"]);
        assert_eq!(evaluate_postfix(&postfix), Ok(3.0));

        let postfix = convert_infix_to_postfix(&["8", "÷", "4", "×", "2"]);
        assert_eq!(postfix, vec!["8", "4", "÷", "2", "×"]);
        assert_eq!(evaluate_postfix(&postfix), Ok(4.0));
    }

    #[test]
    fn higher_precedence_operator_waits_on_stack() {
        let postfix = convert_infix_to_postfix(&["1", "+", "2", "×", "3"]);
        assert_eq!(postfix, vec!["1", "2", "3", "×", "+"]);
    }

    #[test]
    fn negative_numbers_are_plain_operands() {
        let postfix = convert_infix_to_postfix(&["-5", "-", "-2"]);
        assert_eq!(postfix, vec!["-5", "-2", "-"]);
        assert_eq!(evaluate_postfix(&postfix), Ok(-3.0));
    }

    #[test]
    fn zero_is_an_operand() {
        let postfix = convert_infix_to_postfix(&["0", "+", "0.5"]);
        assert_eq!(postfix, vec!["0", "0.5", "+"]);
        assert_eq!(evaluate_postfix(&postfix), Ok(0.5));
    }

    #[test]
    fn nested_brackets_convert() {
        let postfix = convert_infix_to_postfix(&["(", "(", "1", "+", "2", ")", "×", "3", ")"]);
        assert_eq!(postfix, vec!["1", "2", "+", "3", "×"]);
        assert_eq!(evaluate_postfix(&postfix), Ok(9.0));
    }

    #[test]
    fn unclosed_bracket_is_emitted_and_rejected() {
        let postfix = convert_infix_to_postfix(&["(", "1"]);
        assert_eq!(postfix, vec!["1", "("]);
        assert_eq!(
            evaluate_postfix(&postfix),
            Err(EvaluationError::UnknownToken("(".to_string()))
        );
    }

    #[test]
    fn evaluates_operand_order() {
        assert_eq!(evaluate_postfix(&["10", "4", "-"]), Ok(6.0));
        assert_eq!(evaluate_postfix(&["10", "4", "÷"]), Ok(2.5));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(
            evaluate_postfix::<&str>(&[]),
            Err(EvaluationError::LeftoverValues { count: 0 })
        );
    }

    #[test]
    fn too_many_operands_is_invalid() {
        assert_eq!(
            evaluate_postfix(&["1", "2"]),
            Err(EvaluationError::LeftoverValues { count: 2 })
        );
    }

    #[test]
    fn too_many_operators_is_invalid() {
        assert_eq!(
            evaluate_postfix(&["1", "+"]),
            Err(EvaluationError::MissingOperand {
                operator: "+".to_string()
            })
        );
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            evaluate_postfix(&["1", "0", "÷"]),
            Err(EvaluationError::DivisionByZero)
        );
    }

    #[test]
    fn overflow_is_reported() {
        let huge = format!("{}", f64::MAX);
        assert!(matches!(
            evaluate_postfix(&[huge.as_str(), huge.as_str(), "×"]),
            Err(EvaluationError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn non_finite_literals_are_not_numbers() {
        assert_eq!(
            evaluate_postfix(&["inf"]),
            Err(EvaluationError::UnknownToken("inf".to_string()))
        );
    }
}
