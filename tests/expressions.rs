use treecalc::{
    Error, EvalError, Grammar, ParseError, analyze, classify_tokens, describe_tree,
    evaluate_expression,
};

fn eval(src: &str) -> f64 {
    evaluate_expression(src, Grammar::Scientific).unwrap_or_else(|e| {
                                                     panic!("Expression {src:?} failed: {e}")
                                                 })
}

fn eval_err(src: &str) -> Error {
    match evaluate_expression(src, Grammar::Scientific) {
        Ok(v) => panic!("Expression {src:?} evaluated to {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn eval_basic_err(src: &str) -> Error {
    match evaluate_expression(src, Grammar::Basic) {
        Ok(v) => panic!("Expression {src:?} evaluated to {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_close(src: &str, expected: f64) {
    let value = eval(src);
    assert!((value - expected).abs() < 1e-9,
            "Expression {src:?} evaluated to {value}, expected {expected}");
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(eval("42"), 42.0);
    assert_eq!(eval("3.5"), 3.5);
    assert_eq!(eval("0"), 0.0);
    assert_eq!(eval("007"), 7.0);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("10-3-4"), 3.0);
    assert_eq!(eval("20/2/5"), 2.0);
    assert_eq!(eval("2+10/5-1"), 3.0);
}

#[test]
fn exponentiation_is_right_associative_and_binds_tightest() {
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("2*3^2"), 18.0);
    assert_eq!(eval("2^3*2"), 16.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("2*(3+4)"), 14.0);
    assert_eq!(eval("((1))"), 1.0);
}

#[test]
fn unary_negation() {
    assert_eq!(eval("-5+8"), 3.0);
    assert_eq!(eval("--4"), 4.0);
    assert_eq!(eval("2*-3"), -6.0);
    assert_eq!(eval("-(2+3)"), -5.0);
}

#[test]
fn named_functions() {
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert_eq!(eval("abs(-7)"), 7.0);
    assert_eq!(eval("abs(7)"), 7.0);
    assert_close("cos(60)", 0.5);
    assert_close("cot(45)", 1.0);
    assert_eq!(eval("sqrt(sqrt(16))"), 2.0);
}

#[test]
fn cotangent_degenerate_cases() {
    // tan(90 degrees) is astronomically large in floating point, so the
    // cotangent is effectively zero.
    assert_close("cot(90)", 0.0);

    // tan(0) is exactly zero, which is defined as positive infinity.
    let value = eval("cot(0)");
    assert!(value.is_infinite() && value.is_sign_positive(),
            "cot(0) evaluated to {value}, expected +inf");
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(eval_err("5/0"), Error::Eval(EvalError::DivisionByZero { .. })));
    assert!(matches!(eval_err("1/(2-2)"), Error::Eval(EvalError::DivisionByZero { .. })));
}

#[test]
fn non_finite_exponentiation_is_an_error() {
    // Negative base with a fractional exponent has no real result.
    assert!(matches!(eval_err("(0-1)^0.5"),
                     Error::Eval(EvalError::NonFinitePower { .. })));
    assert!(matches!(eval_err("-8^1.5"), Error::Eval(EvalError::NonFinitePower { .. })));

    // Results beyond the representable range are rejected, not returned as
    // infinity.
    assert!(matches!(eval_err("2^9999"), Error::Eval(EvalError::NonFinitePower { .. })));
    assert!(matches!(eval_err("0^-1"), Error::Eval(EvalError::NonFinitePower { .. })));

    // Finite outcomes are unaffected.
    assert_eq!(eval("4^0.5"), 2.0);
    assert_eq!(eval("2^-1"), 0.5);
    assert_eq!(eval("(0-2)^2"), 4.0);
}

#[test]
fn negative_square_root_is_an_error() {
    assert!(matches!(eval_err("sqrt(-1)"),
                     Error::Eval(EvalError::NegativeSquareRoot { .. })));
    assert!(matches!(eval_err("sqrt(3-5)"),
                     Error::Eval(EvalError::NegativeSquareRoot { .. })));
}

#[test]
fn syntax_errors() {
    assert!(matches!(eval_err("2+*3"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_err("2+"), Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(eval_err(""), Error::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(eval_err("(2+3"), Error::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(eval_err("sqrt 16"),
                     Error::Parse(ParseError::ExpectedOpeningParen { .. })));
    assert!(matches!(eval_err("2 3"), Error::Parse(ParseError::TrailingTokens { .. })));
    assert!(matches!(eval_err("1+2)"), Error::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn lexical_errors_name_the_character_and_position() {
    match eval_err("2$3") {
        Error::Parse(ParseError::UnrecognizedCharacter { character, position }) => {
            assert_eq!(character, '$');
            assert_eq!(position, 1);
        },
        e => panic!("Expected an unrecognized character error, got: {e}"),
    }

    // Leading-dot decimals are not part of the grammar.
    assert!(matches!(eval_err(".5"),
                     Error::Parse(ParseError::UnrecognizedCharacter { .. })));
}

#[test]
fn basic_grammar_rejects_the_extended_productions() {
    assert_eq!(evaluate_expression("(2+3)*4", Grammar::Basic).unwrap(), 20.0);
    assert_eq!(evaluate_expression("10/2-1", Grammar::Basic).unwrap(), 4.0);

    assert!(matches!(eval_basic_err("sqrt(4)"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_basic_err("-5"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_basic_err("2^3"),
                     Error::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn tree_description_round_trip() {
    let tree = describe_tree("1+2", Grammar::default()).unwrap();

    assert_eq!(tree.name, "sum");
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].name, "number");
    assert_eq!(tree.children[0].children[0].name, "1");
    assert_eq!(tree.children[1].name, "number");
    assert_eq!(tree.children[1].children[0].name, "2");
}

#[test]
fn tree_description_labels() {
    let tree = describe_tree("-sqrt(16)", Grammar::default()).unwrap();
    assert_eq!(tree.name, "negative");
    assert_eq!(tree.children[0].name, "square root");

    let tree = describe_tree("3.5/2^2", Grammar::default()).unwrap();
    assert_eq!(tree.name, "quotient");
    assert_eq!(tree.children[0].children[0].name, "3.5");
    assert_eq!(tree.children[1].name, "power");

    // Expressions that would fail to evaluate still describe fine.
    let tree = describe_tree("5/0", Grammar::default()).unwrap();
    assert_eq!(tree.name, "quotient");
}

#[test]
fn tree_description_preserves_literal_text() {
    // Literals appear in the tree exactly as typed, not as re-rendered
    // floats.
    let tree = describe_tree("007+3.50", Grammar::default()).unwrap();

    assert_eq!(tree.children[0].children[0].name, "007");
    assert_eq!(tree.children[1].children[0].name, "3.50");

    // The numeric value is unaffected by the spelling.
    assert_eq!(eval("007+3.50"), 10.5);
}

#[test]
fn classifier_counts_numbers_and_operators() {
    let report = classify_tokens("12+3.5*2");

    assert_eq!(report.total_tokens, 5);
    assert_eq!(report.total_numbers, 3);
    assert_eq!(report.total_integers, 2);
    assert_eq!(report.total_decimals, 1);
    assert_eq!(report.total_operators, 2);
    assert_eq!(report.total_numbers, report.total_integers + report.total_decimals);

    let texts: Vec<&str> = report.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["12", "+", "3.5", "*", "2"]);
}

#[test]
fn classifier_recognizes_functions_and_parentheses() {
    let report = classify_tokens("sqrt(16)+cos(60)");

    assert_eq!(report.total_tokens, 9);
    assert_eq!(report.total_numbers, 2);
    assert_eq!(report.total_operators, 1);
}

#[test]
fn classifier_never_fails() {
    // Parser rejects this input; the classifier still reports on it.
    let report = classify_tokens("2+*3");
    assert_eq!(report.total_tokens, 4);
    assert_eq!(report.total_numbers, 2);
    assert_eq!(report.total_operators, 2);

    // Unrecognized characters are silently dropped.
    let report = classify_tokens("2 & 9 = x");
    assert_eq!(report.total_tokens, 2);
    assert_eq!(report.total_numbers, 2);

    let report = classify_tokens("");
    assert_eq!(report.total_tokens, 0);
}

#[test]
fn analysis_combines_all_three_passes() {
    let analysis = analyze("1+2", Grammar::default());
    assert_eq!(analysis.result, Some(3.0));
    assert_eq!(analysis.error, None);
    assert_eq!(analysis.tree.unwrap().name, "sum");
    assert_eq!(analysis.report.total_tokens, 3);

    // Parse failures keep the token report.
    let analysis = analyze("2+*3", Grammar::default());
    assert_eq!(analysis.result, None);
    assert!(analysis.error.is_some());
    assert!(analysis.tree.is_none());
    assert_eq!(analysis.report.total_tokens, 4);

    // Evaluation failures keep the tree and the token report.
    let analysis = analyze("5/0", Grammar::default());
    assert_eq!(analysis.result, None);
    assert!(analysis.error.is_some());
    assert_eq!(analysis.tree.unwrap().name, "quotient");
    assert_eq!(analysis.report.total_tokens, 3);
}

#[test]
fn whitespace_is_insignificant_to_the_parser() {
    assert_eq!(eval(" 2 +  3 * 4 "), 14.0);
    assert_eq!(eval("sqrt ( 16 )"), 4.0);
}
