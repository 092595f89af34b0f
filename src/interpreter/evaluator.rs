/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], the expression dispatch, variable
/// resolution and the finiteness rule every value must pass.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * /` and `^` on `f64` with division-by-zero and overflow
/// detection.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Function evaluation.
///
/// Handles builtin function lookup, arity checking and dispatch.
pub mod function;
