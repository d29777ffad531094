use serde::Serialize;

use crate::ast::{BinaryOperator, Expr, MathFunction, UnaryOperator};

/// A language-neutral hierarchical description of a parse tree.
///
/// Mirrors the shape of the [`Expr`] tree one-to-one with a human-readable
/// label per node, suitable for handing to a visualizer. A number node gets
/// one child carrying the literal exactly as it was typed, so leaves of the
/// description are the literal values themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeDescription {
    /// Human-readable label for the node kind (or a literal value at the
    /// leaves).
    pub name:     String,
    /// Descriptions of the node's operands, in evaluation order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeDescription>,
}

impl TreeDescription {
    fn leaf(name: String) -> Self {
        Self { name,
               children: Vec::new() }
    }
}

/// Produces a [`TreeDescription`] mirroring the given parse tree.
///
/// Purely structural: no evaluation is performed and every node kind of the
/// grammar has a label, so this function cannot fail for a well-formed tree.
///
/// # Parameters
/// - `expr`: The root node to describe.
///
/// # Returns
/// A description with the exact shape of the tree.
///
/// # Example
/// ```
/// use treecalc::engine::{
///     describe::describe,
///     parser::core::{Grammar, parse},
/// };
///
/// let expr = parse("1+2", Grammar::default()).unwrap();
/// let tree = describe(&expr);
///
/// assert_eq!(tree.name, "sum");
/// assert_eq!(tree.children.len(), 2);
/// assert_eq!(tree.children[0].name, "number");
/// assert_eq!(tree.children[0].children[0].name, "1");
/// ```
#[must_use]
pub fn describe(expr: &Expr) -> TreeDescription {
    match expr {
        Expr::Number { lexeme, .. } => {
            TreeDescription { name:     label_number().to_string(),
                              children: vec![TreeDescription::leaf(lexeme.clone())], }
        },

        Expr::BinaryOp { left, op, right, .. } => {
            TreeDescription { name:     label_binary(*op).to_string(),
                              children: vec![describe(left), describe(right)], }
        },

        Expr::UnaryOp { op, operand, .. } => {
            TreeDescription { name:     label_unary(*op).to_string(),
                              children: vec![describe(operand)], }
        },

        Expr::FunctionCall { function, argument, .. } => {
            TreeDescription { name:     label_function(*function).to_string(),
                              children: vec![describe(argument)], }
        },
    }
}

/// Fixed label for number nodes.
const fn label_number() -> &'static str {
    "number"
}

/// Fixed label table for binary operators.
const fn label_binary(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "sum",
        BinaryOperator::Sub => "difference",
        BinaryOperator::Mul => "product",
        BinaryOperator::Div => "quotient",
        BinaryOperator::Pow => "power",
    }
}

/// Fixed label table for unary operators.
const fn label_unary(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Negate => "negative",
    }
}

/// Fixed label table for named functions.
const fn label_function(function: MathFunction) -> &'static str {
    match function {
        MathFunction::Sqrt => "square root",
        MathFunction::Abs => "absolute value",
        MathFunction::Cos => "cosine",
        MathFunction::Cot => "cotangent",
    }
}
