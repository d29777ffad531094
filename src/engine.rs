/// The lexer module tokenizes source text for the parser.
///
/// The lexer (tokenizer) reads the raw expression text and produces an
/// ordered, finite sequence of tokens: numbers, operators, parentheses and
/// function keywords. Whitespace is skipped. This is the first stage of
/// expression processing.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Consumes multi-digit and decimal numbers greedily as single tokens.
/// - Reports lexical errors for characters that match no token pattern.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST honoring operator precedence, associativity, unary negation and
/// function application. It is a deterministic single-pass recursive descent
/// with one token of lookahead and no backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the expression against the selected grammar, reporting errors
///   with byte offsets.
/// - Aborts on the first inconsistency; no partial tree is ever returned.
pub mod parser;

/// The evaluator module reduces AST nodes to numeric results.
///
/// The evaluator walks the tree bottom-up and computes a floating-point value
/// for every node according to its operator semantics. It is the core
/// execution engine.
///
/// # Responsibilities
/// - Evaluates AST nodes in strict post-order, left child first.
/// - Applies degree semantics to the trigonometric functions.
/// - Reports evaluation errors such as division by zero or a negative square
///   root operand.
pub mod evaluator;

/// The describe module renders an AST as displayable structure.
///
/// Walks the same tree the evaluator consumes and produces a hierarchical
/// description (label plus children) that mirrors the tree shape one-to-one,
/// for visualization by the caller.
///
/// # Responsibilities
/// - Maps every node kind to a fixed human-readable label.
/// - Preserves the exact shape of the tree.
/// - Never fails for a well-formed tree.
pub mod describe;
