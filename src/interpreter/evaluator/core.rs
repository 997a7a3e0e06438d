use crate::error::DomainError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `DomainError` describing why the operation has no result.
pub type EvalResult<T> = Result<T, DomainError>;

/// Accepts a computed number only if it is finite.
///
/// Every operator and builtin passes its result through here, so NaN and
/// infinities never become values.
///
/// # Example
/// ```
/// use calq::{error::DomainError, interpreter::evaluator::core::finite};
///
/// assert_eq!(finite(1.5, "sqrt"), Ok(1.5));
/// assert_eq!(finite(f64::NAN, "sqrt"),
///            Err(DomainError::Undefined { operation: "sqrt" }));
/// ```
pub fn finite(value: f64, operation: &'static str) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::Undefined { operation })
    }
}
