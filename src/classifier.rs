use logos::Logos;
use serde::Serialize;

/// A simpler lexical pass used purely for reporting.
///
/// This scanner is deliberately decoupled from the parser's lexer: it must
/// tolerate and classify tokens even when the expression as a whole would
/// fail to parse, so statistics can be reported alongside a parse error.
/// Characters that match no pattern are silently omitted from the report.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum RawToken {
    /// A number with a fractional part, such as `3.5`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,
    /// A number without a fractional part, such as `12`.
    #[regex(r"[0-9]+")]
    Integer,
    /// One of the five arithmetic operators.
    #[regex(r"[+\-*/^]")]
    Operator,
    /// A function keyword.
    #[regex(r"sqrt|abs|cos|cot")]
    Function,
    /// `(` or `)`.
    #[regex(r"[()]")]
    Parenthesis,
}

/// Category label attached to each classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenCategory {
    /// A number without a fractional part.
    Integer,
    /// A number with a fractional part.
    Decimal,
    /// One of `+ - * / ^`.
    Operator,
    /// One of the function keywords `sqrt abs cos cot`.
    Function,
    /// `(` or `)`.
    Parenthesis,
}

/// A single token as seen by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedToken {
    /// The category label.
    pub category: TokenCategory,
    /// The literal text of the token.
    pub text:     String,
}

/// Lexical statistics over an expression.
///
/// Purely derived data; the only invariant is arithmetic consistency:
/// `total_numbers == total_integers + total_decimals`, and `total_tokens`
/// counts every entry in `tokens`. Parentheses participate in `total_tokens`
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TokenReport {
    /// Every recognized token, in source order.
    pub tokens:          Vec<ClassifiedToken>,
    /// Count of all recognized tokens.
    pub total_tokens:    usize,
    /// Count of numeric tokens, integer and decimal alike.
    pub total_numbers:   usize,
    /// Count of integer tokens.
    pub total_integers:  usize,
    /// Count of decimal tokens.
    pub total_decimals:  usize,
    /// Count of operator tokens.
    pub total_operators: usize,
}

/// Re-lexes the source text and tallies token categories.
///
/// This pass never fails: unrecognized characters (including whitespace) are
/// dropped and everything else is classified and counted, regardless of
/// whether the expression would parse.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// A [`TokenReport`] over every recognized token.
///
/// # Example
/// ```
/// use treecalc::classifier::classify;
///
/// let report = classify("12+3.5*2");
///
/// assert_eq!(report.total_numbers, 3);
/// assert_eq!(report.total_integers, 2);
/// assert_eq!(report.total_decimals, 1);
/// assert_eq!(report.total_operators, 2);
/// ```
#[must_use]
pub fn classify(source: &str) -> TokenReport {
    let mut report = TokenReport::default();
    let mut lexer = RawToken::lexer(source);

    while let Some(item) = lexer.next() {
        let Ok(token) = item else {
            // Unmatched characters carry no statistics.
            continue;
        };

        let category = match token {
            RawToken::Integer => {
                report.total_numbers += 1;
                report.total_integers += 1;
                TokenCategory::Integer
            },
            RawToken::Decimal => {
                report.total_numbers += 1;
                report.total_decimals += 1;
                TokenCategory::Decimal
            },
            RawToken::Operator => {
                report.total_operators += 1;
                TokenCategory::Operator
            },
            RawToken::Function => TokenCategory::Function,
            RawToken::Parenthesis => TokenCategory::Parenthesis,
        };

        report.total_tokens += 1;
        report.tokens.push(ClassifiedToken { category,
                                             text: lexer.slice().to_string() });
    }

    report
}
