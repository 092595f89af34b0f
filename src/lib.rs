//! # infix
//!
//! infix is a calculator engine written in Rust.
//! It tokenizes, parses and evaluates infix arithmetic expressions with
//! function calls, named constants and user-defined variables, and reports
//! every failure as a typed error instead of a panic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{Evaluator, check_finite},
        lexer::tokenize,
        parser,
        symbols::SymbolTable,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the binary operators. The AST is
/// built by the parser and traversed by the evaluator; a tree is created for
/// one evaluation and dropped afterwards.
pub mod ast;
/// Formatting of results and errors for people.
///
/// Turns numbers into fixed-point text and maps every error class to the
/// fixed message a calculator front end shows.
pub mod display;
/// Provides unified error types for evaluation and variable management.
///
/// # Responsibilities
/// - Defines the closed `EvalError` taxonomy shared by all phases.
/// - Defines `VarError` for symbol table rule violations.
/// - Defines `HistoryError` for history persistence.
pub mod error;
/// A persisted list of past calculations.
///
/// The evaluation core never reads or writes it; front ends record results
/// here after a successful evaluation.
pub mod history;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together lexing, parsing, evaluation and the symbol
/// table.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Holds constants and user variables.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Tokenizes and parses an expression without evaluating it.
///
/// # Errors
/// - [`EvalError::MalformedSyntax`] for unrecognized characters and grammar
///   violations.
/// - [`EvalError::ParenMismatch`] for unbalanced parentheses.
///
/// # Examples
/// ```
/// let expr = infix::parse("-2^2").unwrap();
/// assert_eq!(expr.to_string(), "(-(2 ^ 2))");
/// ```
pub fn parse(expression: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(expression).collect::<Result<Vec<_>, _>>()?;
    parser::parse(&tokens)
}

/// Evaluates one expression against a symbol table.
///
/// This is the single entry point for front ends. It rejects blank input,
/// then runs tokenizer, parser and evaluator in order and returns the first
/// error any of them reports, or the final value. The final value is checked
/// for finiteness once more before it is returned.
///
/// # Errors
/// Any [`EvalError`]; see its variants for the exact conditions.
///
/// # Examples
/// ```
/// use infix::{error::EvalError, evaluate, interpreter::symbols::SymbolTable};
///
/// let mut symbols = SymbolTable::new();
/// symbols.define("x", 3.0).unwrap();
///
/// assert_eq!(evaluate("x*2", &symbols), Ok(6.0));
/// assert_eq!(evaluate("2^3^2", &symbols), Ok(512.0));
/// assert_eq!(evaluate("5/0", &symbols),
///            Err(EvalError::DivisionByZeroOrOverflow));
/// assert_eq!(evaluate("   ", &symbols), Err(EvalError::EmptyExpression));
/// ```
pub fn evaluate(expression: &str, symbols: &SymbolTable) -> Result<f64, EvalError> {
    if expression.trim().is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let result = parse(expression).and_then(|expr| Evaluator::new(symbols).eval(&expr))
                                  .and_then(check_finite);

    match &result {
        Ok(value) => debug!(expression, value, "evaluated expression"),
        Err(error) => debug!(expression, %error, "evaluation failed"),
    }
    result
}
