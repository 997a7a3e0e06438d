//! # calq
//!
//! calq is a line-oriented calculator written in Rust.
//! It tokenizes a single expression, evaluates it by recursive descent and
//! formats the resulting number or boolean.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{lexer::tokenize, parser::core::parse, value::core::Value},
};

/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines every error that can be raised while evaluating a
/// line, one enum per phase, plus the crate-wide [`error::Error`] that
/// combines them and decides how much detail the user sees.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, domain).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a line.
///
/// This module ties together lexing, parsing, operator evaluation, the
/// registry and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, registry and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Generic over its input and output so it can be driven by stdin/stdout or
/// by in-memory buffers.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Evaluates one line and returns its value.
///
/// # Errors
/// Returns an error if the line cannot be tokenized, does not form a single
/// valid expression, or evaluates an undefined operation.
///
/// # Examples
/// ```
/// use calq::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Value::Number(20.0));
/// assert_eq!(evaluate("3 > 2 && 1 == 1").unwrap(), Value::Bool(true));
/// assert!(evaluate("fact(-1)").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let value = parse(&tokens)?;
    log::debug!("{source:?} evaluated to {value}");
    Ok(value)
}

/// Evaluates one line and returns the formatted result.
///
/// Whole numbers print without a fractional part, so `4/2` gives `"2"`.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use calq::get_result;
///
/// assert_eq!(get_result("4/2").unwrap(), "2");
/// assert_eq!(get_result("1/4").unwrap(), "0.25");
/// assert_eq!(get_result("sqrt 16").unwrap(), "4");
/// ```
pub fn get_result(source: &str) -> Result<String, Error> {
    evaluate(source).map(|value| value.to_string())
}
