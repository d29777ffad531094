use std::iter::Peekable;

use crate::{
    ast::{Expr, MathFunction, UnaryOperator},
    engine::{
        lexer::Token,
        parser::core::{Grammar, ParseResult, parse_expression},
    },
    error::ParseError,
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation) when the grammar
/// enables it. Negation is right-associative, so `--4` parses as `-(-4)`.
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if grammar.has_negation()
       && let Some((Token::Minus, pos)) = tokens.peek()
    {
        let pos = *pos;
        tokens.next();

        let operand = parse_unary(tokens, grammar)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                  operand: Box::new(operand),
                                  pos });
    }

    parse_primary(tokens, grammar)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - parenthesized expressions
/// - named function applications (scientific grammar only)
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
///              | FUNCTION "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(..), _) => parse_number(tokens),
        (Token::LParen, _) => parse_grouping(tokens, grammar),
        (Token::Sqrt | Token::Abs | Token::Cos | Token::Cot, _) if grammar.has_functions() => {
            parse_function(tokens, grammar)
        },
        (token, position) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                               position: *position, }),
    }
}

/// Parses a numeric literal into an [`Expr::Number`] node.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number((value, lexeme)), pos)) => Ok(Expr::Number { value:  *value,
                                                                         lexeme: lexeme.clone(),
                                                                         pos:    *pos, }),
        _ => unreachable!("caller peeked a number token"),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, position) = *tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    let expr = parse_expression(tokens, grammar)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses a named function application.
///
/// Expected form: `FUNCTION ( expression )`
///
/// Every named function takes exactly one parenthesized argument; a function
/// keyword not followed by `(` yields `ParseError::ExpectedOpeningParen`.
///
/// Grammar: `function := ("sqrt" | "abs" | "cos" | "cot") "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a function keyword.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// An [`Expr::FunctionCall`] node.
fn parse_function<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (function, pos) = match tokens.next() {
        Some((Token::Sqrt, pos)) => (MathFunction::Sqrt, *pos),
        Some((Token::Abs, pos)) => (MathFunction::Abs, *pos),
        Some((Token::Cos, pos)) => (MathFunction::Cos, *pos),
        Some((Token::Cot, pos)) => (MathFunction::Cot, *pos),
        _ => unreachable!("caller peeked a function keyword"),
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => {
            return Err(ParseError::ExpectedOpeningParen { function: function.to_string(),
                                                          position: pos, });
        },
    }

    let argument = parse_expression(tokens, grammar)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::FunctionCall { function,
                                                            argument: Box::new(argument),
                                                            pos }),
        _ => Err(ParseError::ExpectedClosingParen { position: pos }),
    }
}
