use crate::{ast::Expr, error::EvalError, interpreter::symbols::SymbolTable};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks an expression tree and computes its value.
///
/// The evaluator only reads the symbol table, so any number of evaluations can
/// share one table while nobody is defining or removing variables.
///
/// ## Usage
///
/// ```
/// use infix::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::Evaluator, symbols::SymbolTable},
/// };
///
/// let symbols = SymbolTable::new();
/// let expr = Expr::binary(Expr::Variable { name: "e".to_string() },
///                         BinaryOperator::Mul,
///                         2.0.into());
///
/// let value = Evaluator::new(&symbols).eval(&expr).unwrap();
/// assert!((value - 2.0 * std::f64::consts::E).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator that resolves names against `symbols`.
    #[must_use]
    pub const fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated left to right and the first error stops the walk.
    ///
    /// # Errors
    /// - [`EvalError::UndefinedSymbol`] for unknown variables or functions.
    /// - [`EvalError::MalformedSyntax`] for calls with the wrong arity.
    /// - [`EvalError::DivisionByZeroOrOverflow`] for any non-finite value.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value } => check_finite(*value),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::UnaryMinus { expr } => self.eval_unary_minus(expr),
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
        }
    }

    /// Resolves a variable reference through the symbol table.
    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.symbols
            .lookup(name)
            .ok_or_else(|| EvalError::UndefinedSymbol { name: name.to_string() })
    }
}

/// Passes finite values through and turns infinities and NaN into
/// [`EvalError::DivisionByZeroOrOverflow`].
///
/// # Example
/// ```
/// use infix::{error::EvalError, interpreter::evaluator::core::check_finite};
///
/// assert_eq!(check_finite(1.5), Ok(1.5));
/// assert_eq!(check_finite(f64::NAN),
///            Err(EvalError::DivisionByZeroOrOverflow));
/// ```
pub fn check_finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::DivisionByZeroOrOverflow)
    }
}
