use crate::{
    error::DomainError,
    interpreter::{
        evaluator::core::{EvalResult, finite},
        value::core::Value,
    },
    util::num::is_integral,
};

/// Raises the first argument to the power of the second.
///
/// A negative base with a fractional exponent has no real result and is
/// rejected with `ComplexPower`. Overflow and `pow(0, -1)` are `Undefined`.
///
/// # Example
/// ```
/// use calq::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("pow(-2, 3)").unwrap(), Value::Number(-8.0));
/// assert!(evaluate("pow(-8, 0.5)").is_err());
/// ```
pub fn pow(args: &[Value]) -> EvalResult<Value> {
    let base = args[0].as_number("pow")?;
    let exponent = args[1].as_number("pow")?;

    if base < 0.0 && !is_integral(exponent) {
        return Err(DomainError::ComplexPower);
    }

    Ok(Value::Number(finite(base.powf(exponent), "pow")?))
}
