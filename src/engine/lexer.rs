use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all tokens recognized by the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens: either an integer such as `42` or a decimal
    /// such as `3.5`. Maximal munch is guaranteed by the lexer, so `12.75`
    /// is one token, never four. Carries the parsed value together with the
    /// literal source text, so the original spelling (e.g. `007`) survives
    /// into the parse tree.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number((f64, String)),
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `abs`
    #[token("abs")]
    Abs,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `cot`
    #[token("cot")]
    Cot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Whitespace carries no token.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number((_, lexeme)) => write!(f, "{lexeme}"),
            Self::Sqrt => write!(f, "sqrt"),
            Self::Abs => write!(f, "abs"),
            Self::Cos => write!(f, "cos"),
            Self::Cot => write!(f, "cot"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Scans the raw source text into a finite token sequence.
///
/// Each token is paired with its byte offset in `source` so later phases can
/// point at the exact place an error occurred. Whitespace is skipped and
/// produces no token.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The ordered token sequence, or a [`ParseError::UnrecognizedCharacter`]
/// naming the first character that matches no token pattern.
///
/// # Example
/// ```
/// use treecalc::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Number((1.0, "1".to_string())), 0),
///                 (Token::Plus, 2),
///                 (Token::Number((2.0, "2".to_string())), 4)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => tokens.push((token, lexer.span().start)),
            Err(()) => {
                let position = lexer.span().start;
                let character = source[position..].chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnrecognizedCharacter { character, position });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice, keeping the
/// literal text alongside the value.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some((f64, String))`: The parsed value and its source text.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<(f64, String)> {
    lex.slice().parse().ok().map(|value| (value, lex.slice().to_owned()))
}
