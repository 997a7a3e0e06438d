use crate::{error::DomainError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `DomainError::IntegerOutOfRange` if the value exceeds
/// `MAX_SAFE_I64_INT` in absolute value.
///
/// ## Example
/// ```
/// use calq::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42).unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_checked(value: i64) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(DomainError::IntegerOutOfRange);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// This is the integer coercion used by `~`, `&`, `|`, `^`, `<<`, `>>` and
/// `fact`: the fractional part is dropped, and values whose integer part
/// cannot be held exactly are rejected.
///
/// ## Errors
/// Returns `DomainError::IntegerOutOfRange` for NaN, infinities, and values
/// beyond `MAX_SAFE_I64_INT` in magnitude.
///
/// ## Example
/// ```
/// use calq::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9).unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-7.9).unwrap(), -7);
/// assert!(f64_to_i64_truncated(f64::NAN).is_err());
/// assert!(f64_to_i64_truncated(1e20).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64) -> EvalResult<i64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(DomainError::IntegerOutOfRange);
    }
    Ok(truncated as i64)
}

/// Converts a shift count to `u32`, accepting only `0..64`.
///
/// ## Errors
/// Returns `DomainError::InvalidShift` for negative counts and counts of 64
/// or more.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub const fn shift_count_checked(count: i64) -> EvalResult<u32> {
    if count < 0 || count >= i64::BITS as i64 {
        return Err(DomainError::InvalidShift { count });
    }
    Ok(count as u32)
}

/// Returns `true` if `value` is finite and has no fractional part.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
