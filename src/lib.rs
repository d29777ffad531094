//! # treecalc
//!
//! treecalc evaluates arithmetic expressions typed as text. For each
//! expression it can produce a numeric result, a hierarchical description of
//! the parse tree suitable for visualization, and a token classification
//! report with lexical statistics.
//!
//! Every operation is a pure, synchronous function of the input string: there
//! is no shared state between invocations, so embedding the crate in a
//! concurrent caller needs no locking.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an expression as a strict tree. The AST is
/// built by the parser and consumed by exactly two independent readers: the
/// evaluator and the tree describer.
///
/// # Responsibilities
/// - Defines node types for every grammar production.
/// - Attaches source byte offsets to nodes for error reporting.
/// - Keeps the node set closed so both consumers match exhaustively.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. Every error is terminal for the current
/// evaluation: no partial result is returned and nothing is downgraded to a
/// default value.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and tree description.
///
/// This module ties together the tokenizer, the recursive-descent parser,
/// the evaluator and the tree describer to provide the full expression
/// pipeline: raw text in, numeric result and displayable tree out.
///
/// # Responsibilities
/// - Coordinates the pipeline stages and the flow of errors between them.
/// - Hosts the grammar capability flag shared by the pipeline.
pub mod engine;
/// Token classification for lexical statistics.
///
/// An independent, simpler lexical pass over the raw text that tags each
/// token with a category and tallies totals. Deliberately decoupled from the
/// parser's tokenizer so it can report on input the parser rejects.
///
/// # Responsibilities
/// - Classifies integers, decimals, operators, function keywords and
///   parentheses.
/// - Never fails; unmatched characters are dropped.
pub mod classifier;

pub use classifier::{ClassifiedToken, TokenCategory, TokenReport};
pub use engine::{describe::TreeDescription, parser::core::Grammar};
pub use error::{Error, EvalError, ParseError};

use crate::engine::{describe, evaluator, parser};

/// Evaluates an expression to a floating-point result.
///
/// Parses `source` under the selected grammar and reduces the resulting tree
/// in strict post-order. Either phase failing aborts the whole evaluation;
/// no partial result is returned.
///
/// # Examples
/// ```
/// use treecalc::{Grammar, evaluate_expression};
///
/// let result = evaluate_expression("2+3*4", Grammar::default()).unwrap();
/// assert_eq!(result, 14.0);
///
/// // Expressions with undefined operations fail as a whole.
/// assert!(evaluate_expression("5/0", Grammar::default()).is_err());
/// ```
pub fn evaluate_expression(source: &str, grammar: Grammar) -> Result<f64, Error> {
    let expr = parser::core::parse(source, grammar)?;
    let result = evaluator::eval(&expr)?;
    log::debug!("evaluated {source:?} to {result}");
    Ok(result)
}

/// Parses an expression and describes its tree for display.
///
/// Shares the same parse as [`evaluate_expression`]; no evaluation is
/// performed, so expressions that parse but would fail to evaluate (such as
/// `5/0`) still yield a description.
///
/// # Examples
/// ```
/// use treecalc::{Grammar, describe_tree};
///
/// let tree = describe_tree("1+2", Grammar::default()).unwrap();
///
/// assert_eq!(tree.name, "sum");
/// assert_eq!(tree.children.len(), 2);
/// ```
pub fn describe_tree(source: &str, grammar: Grammar) -> Result<TreeDescription, Error> {
    let expr = parser::core::parse(source, grammar)?;
    Ok(describe::describe(&expr))
}

/// Re-lexes the source text and reports token statistics.
///
/// Independent of the parser: this never fails, even for input the parser
/// rejects. Unrecognized characters are omitted from the report.
///
/// # Examples
/// ```
/// use treecalc::classify_tokens;
///
/// // Still reports on input that would not parse.
/// let report = classify_tokens("2+*3");
///
/// assert_eq!(report.total_tokens, 4);
/// assert_eq!(report.total_numbers, 2);
/// ```
#[must_use]
pub fn classify_tokens(source: &str) -> TokenReport {
    classifier::classify(source)
}

/// Combined payload produced by [`analyze`].
///
/// Carries the numeric result (or the error message that replaced it), the
/// tree description when a tree exists, and the token report, which is
/// present regardless of parse success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The numeric result, absent when evaluation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    /// The failure message, absent when evaluation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:  Option<String>,
    /// The tree description, absent when parsing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree:   Option<TreeDescription>,
    /// Token statistics, always present.
    #[serde(flatten)]
    pub report: TokenReport,
}

/// Runs all three operations over one expression.
///
/// This is the combined variant a front end typically wants: one call that
/// yields the result or its error, the displayable tree, and the token
/// report. The report is computed by the independent classifier pass, so it
/// is populated even when parsing fails.
///
/// # Examples
/// ```
/// use treecalc::{Grammar, analyze};
///
/// let analysis = analyze("sqrt(16)", Grammar::default());
///
/// assert_eq!(analysis.result, Some(4.0));
/// assert_eq!(analysis.tree.unwrap().name, "square root");
/// assert_eq!(analysis.report.total_tokens, 4);
/// ```
#[must_use]
pub fn analyze(source: &str, grammar: Grammar) -> Analysis {
    let report = classifier::classify(source);

    match parser::core::parse(source, grammar) {
        Ok(expr) => {
            let tree = Some(describe::describe(&expr));
            match evaluator::eval(&expr) {
                Ok(result) => Analysis { result: Some(result),
                                         error: None,
                                         tree,
                                         report },
                Err(e) => Analysis { result: None,
                                     error: Some(e.to_string()),
                                     tree,
                                     report },
            }
        },
        Err(e) => Analysis { result: None,
                             error: Some(e.to_string()),
                             tree: None,
                             report },
    }
}
