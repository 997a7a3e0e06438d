use std::f64::consts::{E, PI};

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::EvalResult,
        registry::{builtin, conversion, fact, power},
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length has
/// already been checked against the declared arity.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A callable registry entry.
#[derive(Debug)]
pub struct Builtin {
    /// The lowercase name the function is looked up by.
    pub name:  &'static str,
    /// The exact number of arguments the function takes.
    pub arity: usize,
    func:      BuiltinFn,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Builtin {
    /// Calls the function after checking the argument count.
    ///
    /// # Parameters
    /// - `args`: Evaluated arguments.
    /// - `position`: Byte offset of the function name, for error reporting.
    ///
    /// # Errors
    /// - `ParseError::ArgumentCountMismatch` if `args.len()` differs from the
    ///   arity.
    /// - Any `DomainError` raised by the function itself.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::{
    ///     registry::core::{Entry, lookup},
    ///     value::core::Value,
    /// };
    ///
    /// let Some(Entry::Function(pow)) = lookup("pow") else { unreachable!() };
    /// let r = pow.call(&[Value::Number(2.0), Value::Number(10.0)], 0).unwrap();
    /// assert_eq!(r, Value::Number(1024.0));
    ///
    /// assert!(pow.call(&[Value::Number(2.0)], 0).is_err());
    /// ```
    pub fn call(&self, args: &[Value], position: usize) -> Result<Value, Error> {
        if args.len() != self.arity {
            return Err(ParseError::ArgumentCountMismatch { name: self.name,
                                                           expected: self.arity,
                                                           found: args.len(),
                                                           position }.into());
        }
        Ok((self.func)(args)?)
    }
}

/// What an identifier resolves to.
#[derive(Debug, PartialEq)]
pub enum Entry {
    /// A named value such as `pi` or `true`.
    Constant(Value),
    /// A callable.
    Function(Builtin),
}

/// Defines the registry by generating a lookup table and a name list.
///
/// Constants are listed first, then functions with their arity and handler.
/// The macro produces `REGISTRY` (static table for lookup) and `NAMES`
/// (public list of identifiers in table order).
macro_rules! registry {
    (
        constants {
            $( $cname:literal => $cvalue:expr ),* $(,)?
        }
        functions {
            $(
                $fname:literal => {
                    arity: $arity:expr,
                    func: $func:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        static REGISTRY: &[(&str, Entry)] = &[
            $(
                ($cname, Entry::Constant($cvalue)),
            )*
            $(
                ($fname, Entry::Function(Builtin { name: $fname, arity: $arity, func: $func })),
            )*
        ];
        /// Every identifier known to the lexer, constants first.
        pub const NAMES: &[&str] = &[
            $($cname,)*
            $($fname,)*
        ];
    };
}

registry! {
    constants {
        "e"     => Value::Number(E),
        "pi"    => Value::Number(PI),
        "true"  => Value::Bool(true),
        "false" => Value::Bool(false),
    }
    functions {
        "sqrt"  => { arity: 1, func: builtin::sqrt },
        "cbrt"  => { arity: 1, func: builtin::cbrt },
        "abs"   => { arity: 1, func: builtin::abs },
        "floor" => { arity: 1, func: builtin::floor },
        "ceil"  => { arity: 1, func: builtin::ceil },
        "trunc" => { arity: 1, func: builtin::trunc },
        "exp"   => { arity: 1, func: builtin::exp },
        "exp2"  => { arity: 1, func: builtin::exp2 },
        "exp10" => { arity: 1, func: builtin::exp10 },
        "log"   => { arity: 1, func: builtin::ln },
        "log2"  => { arity: 1, func: builtin::log2 },
        "log10" => { arity: 1, func: builtin::log10 },
        "sin"   => { arity: 1, func: builtin::sin },
        "cos"   => { arity: 1, func: builtin::cos },
        "tan"   => { arity: 1, func: builtin::tan },
        "asin"  => { arity: 1, func: builtin::asin },
        "acos"  => { arity: 1, func: builtin::acos },
        "atan"  => { arity: 1, func: builtin::atan },
        "atan2" => { arity: 2, func: builtin::atan2 },
        "sinh"  => { arity: 1, func: builtin::sinh },
        "cosh"  => { arity: 1, func: builtin::cosh },
        "tanh"  => { arity: 1, func: builtin::tanh },
        "asinh" => { arity: 1, func: builtin::asinh },
        "acosh" => { arity: 1, func: builtin::acosh },
        "atanh" => { arity: 1, func: builtin::atanh },
        "float" => { arity: 1, func: conversion::float },
        "int"   => { arity: 1, func: conversion::int },
        "bool"  => { arity: 1, func: conversion::bool },
        "fact"  => { arity: 1, func: fact::fact },
        "pow"   => { arity: 2, func: power::pow },
    }
}

/// Looks up a lowercase identifier.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     registry::core::{Entry, lookup},
///     value::core::Value,
/// };
///
/// assert_eq!(lookup("true"), Some(&Entry::Constant(Value::Bool(true))));
/// assert!(matches!(lookup("sqrt"), Some(Entry::Function(f)) if f.arity == 1));
/// assert!(lookup("foo").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Entry> {
    REGISTRY.iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, entry)| entry)
}
