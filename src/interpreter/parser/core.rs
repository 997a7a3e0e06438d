use std::iter::Peekable;

use crate::{
    error::{Error, ParseError},
    interpreter::{lexer::Token, parser::binary::parse_logical_or, value::core::Value},
};

/// Result type used by the parser.
///
/// Parsing evaluates as it goes, so a rule can fail with a lexing-free
/// structural `ParseError` or with a `DomainError` from a reduction; both are
/// carried by the crate-wide [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// Deepest nesting of groups, call arguments and unary operators accepted in
/// one line. Each level costs about a dozen stack frames.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses and evaluates a complete token sequence.
///
/// The sequence must be non-empty and must be consumed entirely by a single
/// expression.
///
/// # Errors
/// - `ParseError::EmptyInput` for an empty sequence.
/// - `ParseError::UnexpectedTrailingTokens` if tokens remain after the
///   expression, such as a stray `)`.
/// - `ParseError::NestingTooDeep` past [`MAX_NESTING_DEPTH`].
/// - Any error raised while parsing or reducing the expression.
///
/// # Example
/// ```
/// use calq::interpreter::{lexer::tokenize, parser::core::parse, value::core::Value};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert_eq!(parse(&tokens).unwrap(), Value::Number(14.0));
///
/// let tokens = tokenize("2 + 3)").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Value> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput.into());
    }

    let mut iter = tokens.iter().peekable();
    let value = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, }.into());
    }

    Ok(value)
}

/// Parses a full expression.
///
/// This is the entry point for sub-expressions: parenthesized groups and
/// function arguments start again at the lowest-precedence level, logical OR.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Nesting depth of this sub-expression, `0` for the whole line.
///
/// # Returns
/// The value of the parsed expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_logical_or(tokens, depth)
}
