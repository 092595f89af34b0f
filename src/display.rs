use crate::error::{EvalError, EvalErrorKind};

/// Number of decimal places a calculator display shows by default.
pub const DEFAULT_PRECISION: usize = 4;

/// Formats a result with a fixed number of decimal places.
///
/// # Example
/// ```
/// use infix::display::{DEFAULT_PRECISION, format_result};
///
/// assert_eq!(format_result(512.0, DEFAULT_PRECISION), "512.0000");
/// assert_eq!(format_result(1.0 / 3.0, 2), "0.33");
/// ```
#[must_use]
pub fn format_result(value: f64, precision: usize) -> String {
    // `-0.0` would print as "-0.0000".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.precision$}")
}

/// Returns the fixed message a front end shows for an evaluation error.
///
/// # Example
/// ```
/// use infix::{display::user_message, error::EvalError};
///
/// assert_eq!(user_message(&EvalError::DivisionByZeroOrOverflow),
///            "ERROR: Division by zero or resulting in an infinity.");
/// ```
#[must_use]
pub const fn user_message(error: &EvalError) -> &'static str {
    match error.kind() {
        EvalErrorKind::EmptyExpression => "Please enter an expression.",
        EvalErrorKind::MalformedSyntax => "ERROR: Malformed expression syntax.",
        EvalErrorKind::ParenMismatch => "ERROR: Parenthesis mismatch.",
        EvalErrorKind::UndefinedSymbol => "ERROR: Undefined variable or invalid syntax.",
        EvalErrorKind::DivisionByZeroOrOverflow => {
            "ERROR: Division by zero or resulting in an infinity."
        },
    }
}
