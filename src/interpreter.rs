/// The evaluator module folds operators into values.
///
/// The parser calls into it at every reduction, so no syntax tree is ever
/// built: each grammar rule returns the value of the text it consumed.
///
/// # Responsibilities
/// - Applies binary and unary operators to `Value`s.
/// - Rejects ill-typed operands and non-finite results with `DomainError`.
pub mod evaluator;
/// The lexer module tokenizes a line for the parser.
///
/// The lexer reads the raw text and produces a sequence of tokens, each a
/// number, boolean, function reference, operator or punctuation mark.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their byte offsets.
/// - Resolves identifiers through the registry.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// Binary and unary operator definitions.
pub mod operator;
/// The parser module evaluates a token sequence by recursive descent.
///
/// Each precedence level is one function that returns the value of the
/// sub-expression it consumed, advancing a `Peekable` iterator over the
/// immutable token slice.
///
/// # Responsibilities
/// - Applies precedence and left-associativity.
/// - Parses function calls with and without parentheses.
/// - Validates structure, reporting errors with byte offsets.
pub mod parser;
/// The registry of named constants and builtin functions.
///
/// A static, read-only table consulted by the lexer.
pub mod registry;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum (numbers and booleans).
/// - Implements type-checked conversions used by the operators.
/// - Formats values in their canonical text form.
pub mod value;
