use crate::interpreter::{
    evaluator::{
        binary::{arithmetic, bitwise, comparison, logic},
        core::EvalResult,
    },
    operator::BinaryOperator,
    value::core::Value,
};

/// Evaluates a binary operation between two values.
///
/// Routes the operation to the handler for its operator family. Each handler
/// checks operand types itself, so the dispatch never fails on its own.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the folded value.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     evaluator::binary::core::eval_binary,
///     operator::BinaryOperator,
///     value::core::Value,
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0));
/// assert_eq!(result.unwrap(), Value::Number(7.0));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod,
        Mul, NotEqual, Or, Shl, Shr, Sub,
    };

    let result = match op {
        Add | Sub | Mul | Div | Mod => arithmetic::eval_arithmetic(op, left, right)?,
        BitAnd | BitOr | BitXor | Shl | Shr => bitwise::eval_bitwise(op, left, right)?,
        Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
            comparison::eval_comparison(op, left, right)?
        },
        And | Or => logic::eval_logic(op, left, right),
    };

    log::trace!("{left} {op} {right} = {result}");
    Ok(result)
}
