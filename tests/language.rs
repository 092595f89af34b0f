use std::{fs, path::Path};

use infix::{
    error::{EvalError, EvalErrorKind},
    evaluate,
    interpreter::symbols::SymbolTable,
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_case(path, line_no + 1, line);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Runs one `expression => expected` line. `expected` is either a number or
/// `!Kind` naming the error class.
fn check_case(path: &Path, line_no: usize, line: &str) {
    let (expression, expected) =
        line.rsplit_once("=>")
            .unwrap_or_else(|| panic!("{path:?}:{line_no}: missing '=>' in {line:?}"));
    let (expression, expected) = (expression.trim(), expected.trim());

    let mut symbols = SymbolTable::new();
    symbols.define("x", 3.0).unwrap();
    symbols.define("rate", 0.5).unwrap();
    let result = evaluate(expression, &symbols);

    if let Some(kind) = expected.strip_prefix('!') {
        let kind: EvalErrorKind = kind.parse().unwrap();
        match result {
            Err(e) => assert_eq!(e.kind(),
                                 kind,
                                 "{path:?}:{line_no}: {expression:?} failed with {e}"),
            Ok(v) => panic!("{path:?}:{line_no}: {expression:?} gave {v}, expected {kind:?}"),
        }
    } else {
        let expected: f64 = expected.parse().unwrap();
        match result {
            Ok(v) => assert!((v - expected).abs() < TOLERANCE,
                             "{path:?}:{line_no}: {expression:?} gave {v}, expected {expected}"),
            Err(e) => panic!("{path:?}:{line_no}: {expression:?} failed: {e}"),
        }
    }
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src, &SymbolTable::new()) {
        Ok(v) => assert!((v - expected).abs() < TOLERANCE,
                         "{src:?} gave {v}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: EvalErrorKind) {
    match evaluate(src, &SymbolTable::new()) {
        Ok(v) => panic!("Expression {src:?} succeeded with {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("1 - 2 - 3", -4.0);
    assert_value("24 / 4 / 3", 2.0);
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("2^-1", 0.5);
    assert_value("2 * 3^2", 18.0);
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_value("-2^2", -4.0);
    assert_value("(-2)^2", 4.0);
    assert_value("--3", 3.0);
    assert_value("2*-3", -6.0);
    assert_value("-2 + 5", 3.0);
}

#[test]
fn numbers_and_whitespace() {
    assert_value(".5 + 2.", 2.5);
    assert_value("1.5e2", 150.0);
    assert_value("  \t 4 \n ", 4.0);
}

#[test]
fn constants_are_case_insensitive() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("PI", std::f64::consts::PI);
    assert_value("E", std::f64::consts::E);
    assert_value("2 * Pi", 2.0 * std::f64::consts::PI);
}

#[test]
fn builtin_functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("SQRT(2)^2", 2.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(pi)", -1.0);
    assert_value("tan(pi / 4)", 1.0);
    assert_value("sqrt(sqrt(81))", 3.0);
    assert_value("sin(pi/2) + cos(0)", 2.0);
}

#[test]
fn variables_resolve_from_the_table() {
    let mut symbols = SymbolTable::new();
    symbols.define("x", 3.0).unwrap();
    symbols.define("sine_of", 2.0).unwrap();

    assert_eq!(evaluate("x*2", &symbols), Ok(6.0));
    assert_eq!(evaluate("X + x", &symbols), Ok(6.0));
    // A variable whose name contains a function name is still a variable.
    assert_eq!(evaluate("sine_of * 2", &symbols), Ok(4.0));
}

#[test]
fn empty_input_is_its_own_error() {
    assert_failure("", EvalErrorKind::EmptyExpression);
    assert_failure("   \t", EvalErrorKind::EmptyExpression);
}

#[test]
fn division_by_zero_and_overflow() {
    assert_failure("5/0", EvalErrorKind::DivisionByZeroOrOverflow);
    assert_failure("0/0", EvalErrorKind::DivisionByZeroOrOverflow);
    assert_failure("10^400", EvalErrorKind::DivisionByZeroOrOverflow);
    assert_failure("0^-1", EvalErrorKind::DivisionByZeroOrOverflow);
    assert_failure("(-8)^(1/3)", EvalErrorKind::DivisionByZeroOrOverflow);
    assert_failure("sqrt(-1)", EvalErrorKind::DivisionByZeroOrOverflow);
    assert_failure("1e999 - 1e999", EvalErrorKind::DivisionByZeroOrOverflow);
}

#[test]
fn parenthesis_mismatch() {
    assert_eq!(evaluate("(1+2", &SymbolTable::new()),
               Err(EvalError::ParenMismatch { position: 4 }));
    assert_failure("((1)", EvalErrorKind::ParenMismatch);
    assert_failure("1+2)", EvalErrorKind::ParenMismatch);
    assert_failure("sqrt(4", EvalErrorKind::ParenMismatch);
    assert_failure("sqrt(4, 2", EvalErrorKind::ParenMismatch);
    assert_eq!(evaluate("((", &SymbolTable::new()),
               Err(EvalError::ParenMismatch { position: 2 }));
    assert_eq!(evaluate("(1+", &SymbolTable::new()),
               Err(EvalError::ParenMismatch { position: 3 }));
    assert_eq!(evaluate(")", &SymbolTable::new()),
               Err(EvalError::ParenMismatch { position: 0 }));
    assert_failure("sqrt(", EvalErrorKind::ParenMismatch);
    assert_failure("1 + )", EvalErrorKind::ParenMismatch);
}

#[test]
fn malformed_syntax() {
    assert_failure("1 + * 2", EvalErrorKind::MalformedSyntax);
    assert_failure("1 +", EvalErrorKind::MalformedSyntax);
    assert_failure("()", EvalErrorKind::MalformedSyntax);
    assert_failure("2 3", EvalErrorKind::MalformedSyntax);
    assert_failure("sqrt(4,)", EvalErrorKind::MalformedSyntax);
    assert_failure("3 # 4", EvalErrorKind::MalformedSyntax);
    assert_failure("2 % 3", EvalErrorKind::MalformedSyntax);
    assert_failure("+3", EvalErrorKind::MalformedSyntax);
    assert_failure("(1 2)", EvalErrorKind::MalformedSyntax);
}

#[test]
fn wrong_function_arity_is_malformed() {
    assert_failure("sqrt()", EvalErrorKind::MalformedSyntax);
    assert_failure("sin(1, 2)", EvalErrorKind::MalformedSyntax);
}

#[test]
fn unknown_names_are_undefined() {
    assert_eq!(evaluate("foo+1", &SymbolTable::new()),
               Err(EvalError::UndefinedSymbol { name: "foo".to_string() }));
    assert_failure("log(10)", EvalErrorKind::UndefinedSymbol);
    assert_failure("sqrt", EvalErrorKind::UndefinedSymbol);
}

#[test]
fn first_error_wins() {
    // The argument is evaluated before the unknown name is looked up.
    assert_failure("nope(1/0)", EvalErrorKind::DivisionByZeroOrOverflow);
    // The left operand is evaluated before the right one.
    assert_failure("foo + 1/0", EvalErrorKind::UndefinedSymbol);
    assert_failure("1/0 + foo", EvalErrorKind::DivisionByZeroOrOverflow);
    // Tokenizer errors come before grammar errors.
    assert_failure("(1 + $", EvalErrorKind::MalformedSyntax);
}

#[test]
fn deep_nesting_is_rejected_not_fatal() {
    let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_failure(&parens, EvalErrorKind::MalformedSyntax);

    let signs = format!("{}1", "-".repeat(10_000));
    assert_failure(&signs, EvalErrorKind::MalformedSyntax);

    let powers = format!("{}1", "1^".repeat(10_000));
    assert_failure(&powers, EvalErrorKind::MalformedSyntax);

    let calls = format!("{}0{}", "sin(".repeat(10_000), ")".repeat(10_000));
    assert_failure(&calls, EvalErrorKind::MalformedSyntax);

    let chain = format!("1{}", "+1".repeat(100_000));
    assert_failure(&chain, EvalErrorKind::MalformedSyntax);

    let unclosed = "(".repeat(10_000);
    assert_failure(&unclosed, EvalErrorKind::MalformedSyntax);
}

#[test]
fn moderate_nesting_still_evaluates() {
    let parens = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_value(&parens, 1.0);
    assert_value(&format!("{}1", "-".repeat(200)), 1.0);
    assert_value(&format!("0{}", "+1".repeat(500)), 500.0);
}

#[test]
fn builtins_reject_wrong_argument_counts() {
    use infix::interpreter::evaluator::function::builtin;

    for f in [builtin::sqrt, builtin::sin, builtin::cos, builtin::tan] {
        assert_eq!(f(&[]).map_err(|e| e.kind()), Err(EvalErrorKind::MalformedSyntax));
        assert_eq!(f(&[1.0, 2.0]).map_err(|e| e.kind()),
                   Err(EvalErrorKind::MalformedSyntax));
    }
}

#[test]
fn evaluation_is_deterministic() {
    let symbols = SymbolTable::new();
    for src in ["2^3^2", "5/0", "(1+2", "foo"] {
        assert_eq!(evaluate(src, &symbols), evaluate(src, &symbols));
    }
}
