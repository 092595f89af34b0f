use crate::{
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, check_finite},
        function::core::arity_error,
    },
};

/// Applies a one-argument `f64` method as a builtin.
///
/// The generated functions take exactly one argument and report any other
/// count as [`EvalError::MalformedSyntax`]. Trigonometric functions take
/// radians.
///
/// # Example
/// ```
/// use infix::interpreter::evaluator::function::builtin::cos;
///
/// assert_eq!(cos(&[0.0]), Ok(1.0));
/// assert!(cos(&[]).is_err());
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            let &[x] = args else {
                return Err(arity_error(stringify!($fname), 1, args.len()));
            };
            check_finite(x.$real_fn())
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);

/// Computes the square root of a non-negative number.
///
/// Negative arguments have no real root and are reported as
/// [`EvalError::DivisionByZeroOrOverflow`], the same class as every other
/// non-finite result.
///
/// # Example
/// ```
/// use infix::{error::EvalError, interpreter::evaluator::function::builtin::sqrt};
///
/// assert_eq!(sqrt(&[9.0]), Ok(3.0));
/// assert_eq!(sqrt(&[-1.0]), Err(EvalError::DivisionByZeroOrOverflow));
/// ```
pub fn sqrt(args: &[f64]) -> EvalResult<f64> {
    let &[x] = args else {
        return Err(arity_error("sqrt", 1, args.len()));
    };
    if x < 0.0 {
        return Err(EvalError::DivisionByZeroOrOverflow);
    }
    check_finite(x.sqrt())
}
