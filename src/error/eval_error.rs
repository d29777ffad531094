#[derive(Debug)]
/// Represents all errors that can occur while reducing an expression tree to
/// a number.
///
/// Evaluation errors are terminal: no partial result is returned. The one
/// degenerate case that is a defined value rather than an error is the
/// cotangent of an angle whose tangent is exactly zero, which evaluates to
/// positive infinity.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// Attempted to take the square root of a negative number.
    NegativeSquareRoot {
        /// The offending operand value.
        value:    f64,
        /// Byte offset of the `sqrt` keyword.
        position: usize,
    },
    /// Exponentiation produced no finite value: either a negative base with
    /// a fractional exponent (NaN) or a result too large to represent
    /// (infinity).
    NonFinitePower {
        /// The base operand.
        base:     f64,
        /// The exponent operand.
        exponent: f64,
        /// Byte offset of the `^` operator.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },
            Self::NegativeSquareRoot { value, position } => write!(f,
                                                                   "Error at offset {position}: Square root of negative number {value}."),
            Self::NonFinitePower { base,
                                   exponent,
                                   position, } => write!(f,
                                                         "Error at offset {position}: {base}^{exponent} has no finite value."),
        }
    }
}

impl std::error::Error for EvalError {}
