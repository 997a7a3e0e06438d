use crate::interpreter::{operator::BinaryOperator, value::core::Value};

/// Evaluates a logical operation between two values.
///
/// The operands are converted with [`Value::truthy`], so numbers take part
/// as non-zero/zero. Both sides have already been evaluated by the time this
/// runs; there is no short-circuiting.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::binary::core::eval_binary,
///     operator::BinaryOperator,
///     value::core::Value,
/// };
///
/// let r = eval_binary(BinaryOperator::Or, &Value::Bool(false), &Value::Number(2.0));
/// assert_eq!(r.unwrap(), Value::Bool(true));
/// ```
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOperator::And => Value::Bool(left.truthy() && right.truthy()),
        BinaryOperator::Or => Value::Bool(left.truthy() || right.truthy()),
        _ => unreachable!(),
    }
}
