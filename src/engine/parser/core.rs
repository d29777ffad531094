use std::iter::Peekable;

use crate::{
    ast::Expr,
    engine::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Selects the production set the parser accepts.
///
/// The two observed dialects of the expression language share one grammar
/// skeleton; this flag enables or disables the extended operator set instead
/// of maintaining two unrelated parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// Addition, subtraction, multiplication, division, parentheses and
    /// number literals only.
    Basic,
    /// The full production set: `Basic` plus exponentiation, unary negation
    /// and the named functions `sqrt`, `abs`, `cos` and `cot`.
    #[default]
    Scientific,
}

impl Grammar {
    /// Whether the `^` operator is a valid production.
    #[must_use]
    pub const fn has_power(self) -> bool {
        matches!(self, Self::Scientific)
    }

    /// Whether prefix `-` is a valid production.
    #[must_use]
    pub const fn has_negation(self) -> bool {
        matches!(self, Self::Scientific)
    }

    /// Whether the named functions are valid productions.
    #[must_use]
    pub const fn has_functions(self) -> bool {
        matches!(self, Self::Scientific)
    }
}

/// Parses a complete expression from raw source text.
///
/// This is the entry point for parsing. It tokenizes the source, descends
/// through the precedence hierarchy starting at the additive level, and then
/// requires the token stream to be fully consumed. The first lexical or
/// structural inconsistency aborts parsing; no partial tree is returned.
///
/// # Parameters
/// - `source`: The raw expression text.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// The root node of the parse tree.
///
/// # Example
/// ```
/// use treecalc::engine::parser::core::{Grammar, parse};
///
/// let expr = parse("(2+3)*4", Grammar::default()).unwrap();
///
/// assert_eq!(expr.position(), 5);
/// ```
pub fn parse(source: &str, grammar: Grammar) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    log::debug!("lexed {} tokens from {} bytes of input", tokens.len(), source.len());

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, grammar)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::TrailingTokens { token:    token.to_string(),
                                                position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression from a token stream.
///
/// Begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `grammar`: The production set to accept.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, grammar: Grammar) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, grammar)
}
