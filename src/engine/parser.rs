/// Parser entry point, result alias and grammar selection.
///
/// Contains the `parse` function that drives the whole descent, the
/// `Grammar` capability flag, and the top of the precedence hierarchy.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: addition/subtraction,
/// multiplication/division, and right-associative exponentiation.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, numeric literals, parenthesized sub-expressions
/// and named function applications.
pub mod unary;
