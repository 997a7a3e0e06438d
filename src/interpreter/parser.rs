/// Entry points and the shared result type.
///
/// `parse` checks the whole-line invariants (non-empty input, no leftover
/// tokens) around the lowest-precedence rule.
pub mod core;

/// Binary precedence levels.
///
/// One function per level, from logical OR down to shifts. Each parses its
/// left operand at the next tighter level, then folds operators of its own
/// level from left to right.
pub mod binary;

/// Unary operators, literals, calls and parentheses.
pub mod unary;

/// Helpers shared by the grammar rules.
pub mod utils;
