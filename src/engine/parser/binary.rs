use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    engine::{
        lexer::Token,
        parser::{
            core::{Grammar, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte-offset information.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, grammar)?;

    while let Some((token, pos)) = tokens.peek() {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            _ => break,
        };
        let pos = *pos;
        tokens.next();

        let right = parse_multiplicative(tokens, grammar)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte-offset information.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_exponent(tokens, grammar)?;

    while let Some((token, pos)) = tokens.peek() {
        let op = match token {
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            _ => break,
        };
        let pos = *pos;
        tokens.next();

        let right = parse_exponent(tokens, grammar)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos };
    }

    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is the tightest-binding binary operator and is
/// right-associative: `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`. The operator is
/// only recognized when the grammar enables it; in the basic grammar a `^`
/// token is left in the stream for the caller to reject.
///
/// The rule is: `exponent := unary ("^" exponent)?`
///
/// # Parameters
/// - `tokens`: Token stream with byte-offset information.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_unary(tokens, grammar)?;

    if grammar.has_power()
       && let Some((Token::Caret, pos)) = tokens.peek()
    {
        let pos = *pos;
        tokens.next();

        let exponent = parse_exponent(tokens, grammar)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   pos });
    }

    Ok(base)
}
