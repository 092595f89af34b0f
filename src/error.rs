/// Expression evaluation errors.
///
/// Defines the closed taxonomy returned by the tokenizer, the parser and the
/// evaluator. Every failure of [`crate::evaluate`] is one of these variants.
pub mod eval_error;
/// Variable definition errors.
///
/// Contains the errors the symbol table raises when a user variable cannot be
/// defined: bad names, names that are already taken, and unusable values.
pub mod var_error;
/// History persistence errors.
pub mod history_error;

pub use eval_error::{EvalError, EvalErrorKind};
pub use history_error::HistoryError;
pub use var_error::VarError;
