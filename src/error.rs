/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unrecognized characters, unexpected
/// tokens, unmatched parentheses and trailing input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a parse tree to
/// a numeric result, such as division by zero or a negative square root
/// operand.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Umbrella error returned by the public entry points.
///
/// Wraps either a [`ParseError`] or an [`EvalError`] so callers that do not
/// care about the phase can handle a single type, while the variant keeps the
/// phase distinguishable.
pub enum Error {
    /// The expression failed to lex or parse.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
