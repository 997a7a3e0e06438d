use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

const fn bool_to_number(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Converts the argument to a number. Booleans become `1` or `0`.
pub fn float(args: &[Value]) -> EvalResult<Value> {
    Ok(match args[0] {
        Value::Number(n) => Value::Number(n),
        Value::Bool(b) => Value::Number(bool_to_number(b)),
    })
}

/// Truncates the argument toward zero. Booleans become `1` or `0`.
///
/// # Example
/// ```
/// use calq::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("int(-2.7)").unwrap(), Value::Number(-2.0));
/// assert_eq!(evaluate("int(true)").unwrap(), Value::Number(1.0));
/// ```
pub fn int(args: &[Value]) -> EvalResult<Value> {
    Ok(match args[0] {
        Value::Number(n) => Value::Number(n.trunc()),
        Value::Bool(b) => Value::Number(bool_to_number(b)),
    })
}

/// Converts the argument to its truth value.
pub fn bool(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Bool(args[0].truthy()))
}
