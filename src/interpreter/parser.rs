/// Entry point and shared result type for expression parsing.
pub mod core;

/// Binary operator parsing.
///
/// Handles the left-associative additive and multiplicative levels of the
/// grammar.
pub mod binary;

/// Unary, exponent and primary parsing.
///
/// Handles prefix negation, right-associative exponentiation, literals,
/// identifiers, function calls and parenthesized groups.
pub mod unary;

/// Reusable helpers for the parser.
pub mod utils;

pub use self::core::parse;
