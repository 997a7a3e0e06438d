use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::unary::eval_unary,
        lexer::Token,
        operator::UnaryOperator,
        parser::{
            core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
        registry::core::Builtin,
        value::core::Value,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (no-op)
/// - `-`  (numeric negation)
/// - `~`  (bitwise complement)
/// - `!`  (logical not)
///
/// Unary operators are right-associative and may be chained, so `!-x` is
/// parsed as `!( -x )` and `--3` is `3`.
///
/// Every nesting cycle of the grammar passes through here, so this is where
/// `depth` is checked against [`MAX_NESTING_DEPTH`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "~" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_NESTING_DEPTH {
        let position = tokens.peek().map_or(0, |(_, position)| *position);
        return Err(ParseError::NestingTooDeep { position }.into());
    }

    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Tilde, _)) => UnaryOperator::Complement,
        Some((Token::Bang, _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens, depth),
    };
    tokens.next();

    let operand = parse_unary(tokens, depth + 1)?;
    Ok(eval_unary(op, &operand)?)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric and boolean literals (including resolved constants)
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | BOOL
///              | call
///              | "(" expression ")"
/// ```
/// # Errors
/// Returns `UnexpectedEndOfInput` when no token is left and
/// `UnexpectedToken` for a token that cannot start an operand.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, position) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Number(n) => Ok(Value::Number(*n)),
        Token::Bool(b) => Ok(Value::Bool(*b)),
        Token::Function(builtin) => parse_call(tokens, *builtin, *position, depth),
        Token::LParen => parse_grouping(tokens, *position, depth),
        tok => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                 position: *position, }.into()),
    }
}

/// Parses the arguments of a function call and applies the function.
///
/// Supported forms:
///
/// - `name(arg1, arg2, ...)`: every argument is a full expression.
/// - `name arg`: only for functions of arity one; the argument is a single
///   unary-level operand, so `sin x + 1` is `sin(x) + 1`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a function of another arity is used without parentheses,
/// - the argument count does not match the arity,
/// - the closing `)` is missing.
fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                     builtin: &'static Builtin,
                     position: usize,
                     depth: usize)
                     -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let args = match tokens.peek() {
        Some((Token::LParen, open_position)) => {
            let open_position = *open_position;
            tokens.next();
            parse_comma_separated(tokens,
                                  |tokens| parse_expression(tokens, depth + 1),
                                  &Token::RParen,
                                  open_position)?
        },
        _ if builtin.arity == 1 => vec![parse_unary(tokens, depth + 1)?],
        _ => {
            return Err(ParseError::ExpectedArgumentList { name: builtin.name,
                                                          position }.into());
        },
    };

    builtin.call(&args, position)
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The opening parenthesis has already been consumed. Failure to find the
/// closing parenthesis yields `ParseError::ExpectedClosingParen` pointing at
/// the opening one.
///
/// Grammar `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         position: usize,
                         depth: usize)
                         -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let value = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(value),
        _ => Err(ParseError::ExpectedClosingParen { position }.into()),
    }
}
