/// An abstract syntax tree (AST) node representing a parsed arithmetic
/// expression.
///
/// `Expr` is a closed tagged union over every production of the grammar:
/// numeric literals, the five binary operators, unary negation and the four
/// named functions. Each non-leaf variant exclusively owns its operand
/// subtrees, so a parsed expression is always a strict tree. Every variant
/// carries the byte offset of the token that introduced it, used for error
/// reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `3.5`.
    Number {
        /// The literal value.
        value:  f64,
        /// The literal as it was typed, e.g. `007` or `3.50`.
        lexeme: String,
        /// Byte offset in the source text.
        pos:    usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset of the operator in the source text.
        pos:   usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Byte offset of the operator in the source text.
        pos:     usize,
    },
    /// A named function applied to one parenthesized argument, e.g.
    /// `sqrt(16)`.
    FunctionCall {
        /// The function being applied.
        function: MathFunction,
        /// The argument expression.
        argument: Box<Self>,
        /// Byte offset of the function keyword in the source text.
        pos:      usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::Expr;
    ///
    /// let expr = Expr::Number { value:  1.0,
    ///                           lexeme: "1".to_string(),
    ///                           pos:    4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::UnaryOp { pos, .. }
            | Self::FunctionCall { pos, .. } => *pos,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// A named function recognized by the grammar.
///
/// Each function takes exactly one parenthesized argument. The trigonometric
/// functions interpret their argument in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    /// Principal square root (`sqrt`).
    Sqrt,
    /// Absolute value (`abs`).
    Abs,
    /// Cosine of an angle in degrees (`cos`).
    Cos,
    /// Cotangent of an angle in degrees (`cot`).
    Cot,
}

impl MathFunction {
    /// Returns the keyword that names the function in source text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Cos => "cos",
            Self::Cot => "cot",
        }
    }
}

impl std::fmt::Display for MathFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
