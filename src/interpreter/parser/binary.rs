use std::iter::Peekable;

use crate::interpreter::{
    evaluator::binary::core::eval_binary,
    lexer::Token,
    operator::BinaryOperator,
    parser::{core::ParseResult, unary::parse_unary, utils::take_operator},
    value::core::Value,
};

/// Parses logical OR expressions.
///
/// This is the loosest level; full expressions start here. Every level passes
/// `depth`, the number of enclosing groups, calls and unary operators, down to
/// [`parse_unary`], which enforces the nesting limit.
///
/// Grammar: `or := and ("||" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_logical_and(tokens, depth)?;
    while let Some(op) = take_operator(tokens, &[BinaryOperator::Or]) {
        let right = parse_logical_and(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// Grammar: `and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_equality(tokens, depth)?;
    while let Some(op) = take_operator(tokens, &[BinaryOperator::And]) {
        let right = parse_equality(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// `=` is accepted as a synonym for `==`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_relational(tokens, depth)?;
    while let Some(op) =
        take_operator(tokens, &[BinaryOperator::Equal, BinaryOperator::NotEqual])
    {
        let right = parse_relational(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}

/// Parses ordering comparisons.
///
/// Chained comparisons fold left to right, so `1 < 2 < 3` compares the
/// boolean `1 < 2` with `3` and fails.
///
/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_additive(tokens, depth)?;
    while let Some(op) = take_operator(tokens,
                                       &[BinaryOperator::Less,
                                         BinaryOperator::LessEqual,
                                         BinaryOperator::Greater,
                                         BinaryOperator::GreaterEqual])
    {
        let right = parse_additive(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `a - b - c`
/// evaluates as `(a - b) - c`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    while let Some(op) = take_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        let right = parse_multiplicative(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := bitwise (("*" | "/" | "%") bitwise)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_bitwise(tokens, depth)?;
    while let Some(op) = take_operator(tokens,
                                       &[BinaryOperator::Mul,
                                         BinaryOperator::Div,
                                         BinaryOperator::Mod])
    {
        let right = parse_bitwise(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}

/// Parses bitwise expressions.
///
/// These bind tighter than multiplication: `2 * 3 | 4` is `2 * (3 | 4)`.
/// `&`, `|` and `^` share one level.
///
/// Grammar: `bitwise := shift (("&" | "|" | "^") shift)*`
pub fn parse_bitwise<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_shift(tokens, depth)?;
    while let Some(op) = take_operator(tokens,
                                       &[BinaryOperator::BitAnd,
                                         BinaryOperator::BitOr,
                                         BinaryOperator::BitXor])
    {
        let right = parse_shift(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}

/// Parses shift expressions, the tightest binary level.
///
/// Grammar: `shift := unary (("<<" | ">>") unary)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Value>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some(op) = take_operator(tokens, &[BinaryOperator::Shl, BinaryOperator::Shr]) {
        let right = parse_unary(tokens, depth)?;
        left = eval_binary(op, &left, &right)?;
    }
    Ok(left)
}
