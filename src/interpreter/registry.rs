/// The static identifier table and the `Builtin` type.
///
/// Maps lowercase identifiers to constants or callables with a fixed arity.
/// The table is a `static` slice, so it is read-only and shared freely.
pub mod core;
/// Single-argument math functions backed by `f64` methods.
pub(crate) mod builtin;
/// The `float`, `int` and `bool` conversion functions.
pub(crate) mod conversion;
/// The `fact` function.
pub(crate) mod fact;
/// The `pow` function.
pub(crate) mod power;
