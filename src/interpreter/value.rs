/// The `Value` type and its conversions.
///
/// Every grammar rule reduces to a `Value`: either a double-precision number
/// or a boolean. Conversions into `f64`, `i64` and `bool` report a
/// `DomainError` when the operand has the wrong type.
pub mod core;
/// Canonical text form of a value.
///
/// Integral numbers print without a fractional part or exponent; other
/// numbers use the shortest decimal form that round-trips.
pub mod format;
