#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents failures of mathematically undefined or ill-typed operations.
pub enum DomainError {
    /// `fact` was applied to a negative number.
    NegativeFactorial,
    /// `pow` was asked for a fractional power of a negative base.
    ComplexPower,
    /// Division or modulo by zero.
    DivisionByZero,
    /// An operation produced a NaN or infinite result.
    Undefined {
        /// The operator or function name.
        operation: &'static str,
    },
    /// A numeric operand was required but a boolean was given.
    ExpectedNumber {
        /// The operator or function name.
        operation: &'static str,
    },
    /// Both operands of a comparison must share a type.
    TypeMismatch {
        /// The operator name.
        operation: &'static str,
    },
    /// A value could not be represented exactly as a 64-bit integer, or an
    /// integer result could not be represented exactly as a float.
    IntegerOutOfRange,
    /// A shift count outside `0..64`.
    InvalidShift {
        /// The rejected shift count.
        count: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeFactorial => {
                write!(f, "Domain error: Factorial of a negative number.")
            },
            Self::ComplexPower => write!(f,
                                         "Domain error: Negative base with a fractional exponent has no real result."),
            Self::DivisionByZero => write!(f, "Domain error: Division by zero."),
            Self::Undefined { operation } => {
                write!(f, "Domain error: '{operation}' is undefined for this input.")
            },
            Self::ExpectedNumber { operation } => {
                write!(f, "Domain error: '{operation}' expects a number.")
            },
            Self::TypeMismatch { operation } => write!(f,
                                                       "Domain error: '{operation}' cannot compare a number with a boolean."),
            Self::IntegerOutOfRange => {
                write!(f, "Domain error: Value is out of the exact integer range.")
            },
            Self::InvalidShift { count } => {
                write!(f, "Domain error: Shift count {count} is outside 0..64.")
            },
        }
    }
}

impl std::error::Error for DomainError {}
