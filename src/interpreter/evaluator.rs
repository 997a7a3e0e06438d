/// Binary operator evaluation logic.
///
/// Folds `(op, left, right)` into a single value for arithmetic, bitwise,
/// shift, comparison and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements `+`, `-`, `~` and `!`.
pub mod unary;

/// Shared evaluation types and checks.
pub mod core;
