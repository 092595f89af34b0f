use tracing::trace;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator, check_finite},
        function::builtin,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length has
/// already been checked against its arity.
type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every function callable from an expression.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt" => { arity: 1, func: builtin::sqrt },
    "sin"  => { arity: 1, func: builtin::sin },
    "cos"  => { arity: 1, func: builtin::cos },
    "tan"  => { arity: 1, func: builtin::tan },
}

/// Reports whether `name` is a builtin function.
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// The error for a call with the wrong number of arguments.
pub(crate) fn arity_error(name: &str, expected: usize, supplied: usize) -> EvalError {
    EvalError::MalformedSyntax { details: format!("{name} takes {expected} argument(s) but {supplied} were supplied") }
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated first, in order, so an error inside an
    /// argument wins over a problem with the call itself. Then the name is
    /// looked up in the builtin table and the arity is verified.
    ///
    /// # Errors
    /// - [`EvalError::UndefinedSymbol`] if no builtin has this name.
    /// - [`EvalError::MalformedSyntax`] if the argument count is wrong.
    /// - Whatever the builtin itself reports.
    pub(crate) fn eval_function_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg))
                                .collect::<EvalResult<Vec<_>>>()?;

        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| EvalError::UndefinedSymbol { name:
                                                                                   name.to_string() })?;

        if arg_vals.len() != builtin.arity {
            return Err(arity_error(name, builtin.arity, arg_vals.len()));
        }

        trace!(function = name, args = ?arg_vals, "calling builtin");
        check_finite((builtin.func)(&arg_vals)?)
    }
}
