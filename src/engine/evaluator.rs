use crate::{
    ast::{BinaryOperator, Expr, MathFunction, UnaryOperator},
    error::EvalError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a parse tree to a floating-point result.
///
/// Evaluation is strictly post-order: both children of a binary node are
/// reduced before the node itself, left child first. The match over node
/// kinds is exhaustive, so every grammar production has defined semantics.
///
/// Trigonometric functions interpret their argument in degrees. The
/// cotangent of an angle whose tangent is exactly zero is defined as positive
/// infinity rather than an error; every other domain violation (division by
/// zero, negative square root, non-finite exponentiation) aborts with an
/// [`EvalError`].
///
/// # Parameters
/// - `expr`: The root node to reduce.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Example
/// ```
/// use treecalc::engine::{
///     evaluator::eval,
///     parser::core::{Grammar, parse},
/// };
///
/// let expr = parse("2^3^2", Grammar::default()).unwrap();
///
/// assert_eq!(eval(&expr).unwrap(), 512.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),

        Expr::BinaryOp { left, op, right, pos } => {
            let a = eval(left)?;
            let b = eval(right)?;
            eval_binary_op(*op, a, b, *pos)
        },

        Expr::UnaryOp { op, operand, .. } => match op {
            UnaryOperator::Negate => Ok(-eval(operand)?),
        },

        Expr::FunctionCall { function,
                             argument,
                             pos, } => {
            let x = eval(argument)?;
            eval_function(*function, x, *pos)
        },
    }
}

/// Combines two already-reduced operands with a binary operator.
///
/// Division checks its divisor explicitly: a zero divisor is
/// [`EvalError::DivisionByZero`], never a silent infinity or NaN.
/// Exponentiation checks its result the same way: a negative base with a
/// fractional exponent or an out-of-range result is
/// [`EvalError::NonFinitePower`].
fn eval_binary_op(op: BinaryOperator, a: f64, b: f64, pos: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(a + b),
        BinaryOperator::Sub => Ok(a - b),
        BinaryOperator::Mul => Ok(a * b),
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero { position: pos });
            }
            Ok(a / b)
        },
        BinaryOperator::Pow => {
            let result = a.powf(b);
            if !result.is_finite() {
                return Err(EvalError::NonFinitePower { base:     a,
                                                       exponent: b,
                                                       position: pos, });
            }
            Ok(result)
        },
    }
}

/// Applies a named function to an already-reduced argument.
///
/// `cos` and `cot` convert their argument from degrees to radians before the
/// trigonometric call. `cot` is defined as `1 / tan`; when the tangent is
/// exactly zero the result is positive infinity by definition.
fn eval_function(function: MathFunction, x: f64, pos: usize) -> EvalResult<f64> {
    match function {
        MathFunction::Sqrt => {
            if x < 0.0 {
                return Err(EvalError::NegativeSquareRoot { value:    x,
                                                           position: pos, });
            }
            Ok(x.sqrt())
        },
        MathFunction::Abs => Ok(x.abs()),
        MathFunction::Cos => Ok(x.to_radians().cos()),
        MathFunction::Cot => {
            let tangent = x.to_radians().tan();
            if tangent == 0.0 {
                return Ok(f64::INFINITY);
            }
            Ok(1.0 / tangent)
        },
    }
}
