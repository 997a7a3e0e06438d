/// Dispatch of binary operators to their handlers.
pub mod core;

/// `+`, `-`, `*`, `/` and `%`.
pub(crate) mod arithmetic;

/// `&`, `|`, `^`, `<<` and `>>` on truncated integers.
pub(crate) mod bitwise;

/// Equality and ordering.
pub(crate) mod comparison;

/// `&&` and `||`.
pub(crate) mod logic;
