use crate::interpreter::{
    evaluator::core::{EvalResult, finite},
    value::core::Value,
};

/// Applies an `f64` function to the single numeric argument.
///
/// The generated functions reject booleans with `ExpectedNumber` and report
/// NaN or infinite results as `Undefined`, which is how `log(-1)`,
/// `sqrt(-4)` or `acosh(0)` fail.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     registry::core::{Entry, lookup},
///     value::core::Value,
/// };
///
/// let Some(Entry::Function(sqrt)) = lookup("sqrt") else { unreachable!() };
/// assert_eq!(sqrt.call(&[Value::Number(16.0)], 0).unwrap(), Value::Number(4.0));
/// assert!(sqrt.call(&[Value::Number(-1.0)], 0).is_err());
/// ```
macro_rules! real_builtin {
    ($fname:ident, $name:literal, $real_fn:expr) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            let x = args[0].as_number($name)?;
            Ok(Value::Number(finite($real_fn(x), $name)?))
        }
    };
}

real_builtin!(sqrt, "sqrt", f64::sqrt);
real_builtin!(cbrt, "cbrt", f64::cbrt);
real_builtin!(abs, "abs", f64::abs);
real_builtin!(floor, "floor", f64::floor);
real_builtin!(ceil, "ceil", f64::ceil);
real_builtin!(trunc, "trunc", f64::trunc);
real_builtin!(exp, "exp", f64::exp);
real_builtin!(exp2, "exp2", f64::exp2);
real_builtin!(exp10, "exp10", |x: f64| 10.0_f64.powf(x));
real_builtin!(ln, "log", f64::ln);
real_builtin!(log2, "log2", f64::log2);
real_builtin!(log10, "log10", f64::log10);
real_builtin!(sin, "sin", f64::sin);
real_builtin!(cos, "cos", f64::cos);
real_builtin!(tan, "tan", f64::tan);
real_builtin!(asin, "asin", f64::asin);
real_builtin!(acos, "acos", f64::acos);
real_builtin!(atan, "atan", f64::atan);
real_builtin!(sinh, "sinh", f64::sinh);
real_builtin!(cosh, "cosh", f64::cosh);
real_builtin!(tanh, "tanh", f64::tanh);
real_builtin!(asinh, "asinh", f64::asinh);
real_builtin!(acosh, "acosh", f64::acosh);
real_builtin!(atanh, "atanh", f64::atanh);

/// Four-quadrant arctangent of `y / x`, taking `y` first.
///
/// # Example
/// ```
/// use calq::{evaluate, interpreter::value::core::Value};
///
/// let r = evaluate("atan2(1, 1)").unwrap();
/// assert_eq!(r, Value::Number(std::f64::consts::FRAC_PI_4));
/// ```
pub fn atan2(args: &[Value]) -> EvalResult<Value> {
    let y = args[0].as_number("atan2")?;
    let x = args[1].as_number("atan2")?;
    Ok(Value::Number(finite(y.atan2(x), "atan2")?))
}
