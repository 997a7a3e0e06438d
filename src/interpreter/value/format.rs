use crate::{interpreter::value::core::Value, util::num::is_integral};

impl std::fmt::Display for Value {
    /// Formats a value in its canonical form.
    ///
    /// ```
    /// use calq::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.0).to_string(), "2");
    /// assert_eq!(Value::Number(-0.0).to_string(), "0");
    /// assert_eq!(Value::Number(0.25).to_string(), "0.25");
    /// assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
    /// assert_eq!(Value::Bool(false).to_string(), "false");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Covers `-0` as well.
            Self::Number(n) if *n == 0.0 => write!(f, "0"),
            Self::Number(n) if is_integral(*n) => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
