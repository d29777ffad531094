#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Lexical failures carry the offending character; structural failures carry
/// the unexpected token. Both carry the byte offset in the source text.
pub enum ParseError {
    /// The lexer hit a character that belongs to no token pattern.
    UnrecognizedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset where the character was found.
        position:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset where the token was found.
        position: usize,
    },
    /// Reached the end of input while a production was still open.
    UnexpectedEndOfInput,
    /// An opening parenthesis `(` was expected after a function keyword.
    ExpectedOpeningParen {
        /// The function keyword that requires an argument.
        function: String,
        /// Byte offset of the function keyword.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset where the extra token was found.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Error at offset {position}: Unrecognized character '{character}'.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedOpeningParen { function, position } => write!(f,
                                                                        "Error at offset {position}: Expected '(' after '{function}'."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),

            Self::TrailingTokens { token, position } => write!(f,
                                                               "Error at offset {position}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
