use crate::{
    interpreter::{evaluator::core::EvalResult, operator::UnaryOperator, value::core::Value},
    util::num::i64_to_f64_checked,
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: returns the operand unchanged.
/// - `Negate`: numeric negation.
/// - `Complement`: truncates to an integer and flips every bit.
/// - `Not`: logical negation of the operand's truth value; numbers are true
///   when non-zero.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::unary::eval_unary,
///     operator::UnaryOperator,
///     value::core::Value,
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0)).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// let v = eval_unary(UnaryOperator::Complement, &Value::Number(0.0)).unwrap();
/// assert_eq!(v, Value::Number(-1.0));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Number(1.0)).unwrap();
/// assert_eq!(v, Value::Bool(false));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    let result = match op {
        UnaryOperator::Plus => *value,
        UnaryOperator::Negate => Value::Number(-value.as_number(op.symbol())?),
        UnaryOperator::Complement => {
            Value::Number(i64_to_f64_checked(!value.as_integer(op.symbol())?)?)
        },
        UnaryOperator::Not => Value::Bool(!value.truthy()),
    };

    log::trace!("{op}{value} = {result}");
    Ok(result)
}
