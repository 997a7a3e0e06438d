use crate::{
    error::DomainError,
    interpreter::{
        evaluator::core::{EvalResult, finite},
        operator::BinaryOperator,
        value::core::Value,
    },
};

/// Evaluates an arithmetic operation on two numbers.
///
/// Booleans are rejected with `ExpectedNumber`. Division and modulo by zero
/// fail with `DivisionByZero`, and any result that overflows to infinity is
/// `Undefined`.
///
/// `%` is a floored modulo: the result takes the sign of the divisor, so
/// `-7 % 3` is `2`.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::binary::core::eval_binary,
///     operator::BinaryOperator,
///     value::core::Value,
/// };
///
/// let r = eval_binary(BinaryOperator::Mod, &Value::Number(-7.0), &Value::Number(3.0));
/// assert_eq!(r.unwrap(), Value::Number(2.0));
/// ```
pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let symbol = op.symbol();
    let a = left.as_number(symbol)?;
    let b = right.as_number(symbol)?;

    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            a / b
        },
        BinaryOperator::Mod => {
            if b == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            floored_mod(a, b)
        },
        _ => unreachable!(),
    };

    Ok(Value::Number(finite(result, symbol)?))
}

fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
}
