use crate::{
    error::DomainError,
    interpreter::{
        evaluator::core::{EvalResult, finite},
        value::core::Value,
    },
    util::num::i64_to_f64_checked,
};

/// Computes the factorial of the truncated argument.
///
/// `fact(n) = n * fact(n - 1)` with `fact(0) = 1`. The product is built up
/// in `f64` and fails as soon as it overflows, which happens past `170`.
///
/// # Errors
/// - `NegativeFactorial` for arguments below zero after truncation.
/// - `Undefined` when the result does not fit an `f64`.
///
/// # Example
/// ```
/// use calq::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("fact(5.9)").unwrap(), Value::Number(120.0));
/// assert_eq!(evaluate("fact 0").unwrap(), Value::Number(1.0));
/// assert!(evaluate("fact(-1)").is_err());
/// assert!(evaluate("fact(171)").is_err());
/// ```
pub fn fact(args: &[Value]) -> EvalResult<Value> {
    let n = args[0].as_integer("fact")?;
    if n < 0 {
        return Err(DomainError::NegativeFactorial);
    }

    let mut product = 1.0;
    for k in 2..=n {
        product = finite(product * i64_to_f64_checked(k)?, "fact")?;
    }
    Ok(Value::Number(product))
}
