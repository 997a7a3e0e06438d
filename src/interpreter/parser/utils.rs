use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        operator::BinaryOperator,
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// Used for function argument lists. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `open_position`: Byte offset of the opening token.
///
/// # Errors
/// Returns an error if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    open_position: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or '{closing}', found '{tok}'"),
                                                         position: *position, }.into());
            },
            None => {
                return Err(ParseError::ExpectedClosingParen { position: open_position }.into());
            },
        }
    }
    Ok(items)
}

/// Consumes the next token if it is one of the `accepted` binary operators.
///
/// Returns the operator that was consumed, or `None` (leaving the iterator
/// untouched) when the next token belongs to another level or the input is
/// exhausted. This is how a precedence level falls through to its caller.
pub(in crate::interpreter::parser) fn take_operator<'a, I>(tokens: &mut Peekable<I>,
                                                           accepted: &[BinaryOperator])
                                                           -> Option<BinaryOperator>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, _) = tokens.peek()?;
    let op = token_to_binary_operator(token).filter(|op| accepted.contains(op))?;
    tokens.next();
    Some(op)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that never act as binary operators, such as
/// literals, parentheses, `~` and `!`.
///
/// # Example
/// ```
/// use calq::interpreter::{
///     lexer::Token,
///     operator::BinaryOperator,
///     parser::utils::token_to_binary_operator,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::BitXor));
/// assert_eq!(token_to_binary_operator(&Token::Tilde), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::DoublePipe => Some(BinaryOperator::Or),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::LessLess => Some(BinaryOperator::Shl),
        Token::GreaterGreater => Some(BinaryOperator::Shr),
        _ => None,
    }
}
