use crate::{
    error::DomainError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_i64_truncated,
};

/// Represents a runtime value.
///
/// Values live only for the evaluation of a single line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators, the logical operators, `!` and the
    /// `bool` function.
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the number held by this value.
    ///
    /// # Parameters
    /// - `operation`: Operator or function name, used in the error.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(DomainError::ExpectedNumber)`: If the value is a boolean.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number("+").unwrap(), 2.5);
    /// assert!(Value::Bool(true).as_number("+").is_err());
    /// ```
    pub const fn as_number(&self, operation: &'static str) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(_) => Err(DomainError::ExpectedNumber { operation }),
        }
    }

    /// Returns the number held by this value truncated to an integer.
    ///
    /// # Errors
    /// Fails for booleans and for numbers outside the exact integer range.
    pub fn as_integer(&self, operation: &'static str) -> EvalResult<i64> {
        f64_to_i64_truncated(self.as_number(operation)?)
    }

    /// Returns the truth value of this value.
    ///
    /// Booleans are returned unchanged; numbers are true when non-zero. NaN
    /// never reaches this point since non-finite results are rejected when
    /// they are produced.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(-3.0).truthy());
    /// assert!(!Value::Number(0.0).truthy());
    /// assert!(Value::Bool(true).truthy());
    /// ```
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
        }
    }
}
