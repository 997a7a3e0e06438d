/// Numeric conversion helpers.
///
/// Bitwise, shift and factorial operations work on integers while every value
/// is stored as an `f64`. The helpers here move between the two
/// representations without silent data loss: a conversion either is exact or
/// reports a [`DomainError`](crate::error::DomainError).
pub mod num;
