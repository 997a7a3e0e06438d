use crate::{
    error::DomainError,
    interpreter::{evaluator::core::EvalResult, operator::BinaryOperator, value::core::Value},
};

/// Evaluates a comparison between two values.
///
/// Equality and inequality accept two numbers or two booleans; comparing a
/// number with a boolean is a `TypeMismatch`. Ordering operators accept
/// numbers only.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::binary::core::eval_binary,
///     operator::BinaryOperator,
///     value::core::Value,
/// };
///
/// let r = eval_binary(BinaryOperator::LessEqual, &Value::Number(2.0), &Value::Number(2.0));
/// assert_eq!(r.unwrap(), Value::Bool(true));
///
/// let r = eval_binary(BinaryOperator::Equal, &Value::Bool(true), &Value::Number(1.0));
/// assert!(r.is_err());
/// ```
pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let symbol = op.symbol();
    let result = match op {
        Equal | NotEqual => {
            let equal = match (left, right) {
                (Value::Number(a), Value::Number(b)) => a == b,
                (Value::Bool(a), Value::Bool(b)) => a == b,
                _ => return Err(DomainError::TypeMismatch { operation: symbol }),
            };
            if op == Equal { equal } else { !equal }
        },
        Less | LessEqual | Greater | GreaterEqual => {
            let a = left.as_number(symbol)?;
            let b = right.as_number(symbol)?;
            match op {
                Less => a < b,
                LessEqual => a <= b,
                Greater => a > b,
                GreaterEqual => a >= b,
                _ => unreachable!(),
            }
        },
        _ => unreachable!(),
    };

    Ok(Value::Bool(result))
}
