use crate::{
    error::DomainError,
    interpreter::{evaluator::core::EvalResult, operator::BinaryOperator, value::core::Value},
    util::num::{i64_to_f64_checked, shift_count_checked},
};

/// Evaluates a bitwise or shift operation.
///
/// Both operands are truncated toward zero before the operation. The result
/// must fit the exact integer range of an `f64`; shift counts must lie in
/// `0..64`. `>>` is an arithmetic shift, so negative values stay negative.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::binary::core::eval_binary,
///     operator::BinaryOperator,
///     value::core::Value,
/// };
///
/// let r = eval_binary(BinaryOperator::BitXor, &Value::Number(6.9), &Value::Number(3.0));
/// assert_eq!(r.unwrap(), Value::Number(5.0));
///
/// let r = eval_binary(BinaryOperator::Shr, &Value::Number(-8.0), &Value::Number(1.0));
/// assert_eq!(r.unwrap(), Value::Number(-4.0));
/// ```
pub fn eval_bitwise(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let symbol = op.symbol();
    let a = left.as_integer(symbol)?;
    let b = right.as_integer(symbol)?;

    let result = match op {
        BinaryOperator::BitAnd => a & b,
        BinaryOperator::BitOr => a | b,
        BinaryOperator::BitXor => a ^ b,
        BinaryOperator::Shl => {
            let count = shift_count_checked(b)?;
            a.checked_mul(1_i64 << count)
             .ok_or(DomainError::IntegerOutOfRange)?
        },
        BinaryOperator::Shr => a >> shift_count_checked(b)?,
        _ => unreachable!(),
    };

    Ok(Value::Number(i64_to_f64_checked(result)?))
}
