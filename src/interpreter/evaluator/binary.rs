use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator, check_finite},
};

impl Evaluator<'_> {
    /// Evaluates both operands, left first, and combines them.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, left, right)
    }

    /// Applies a binary operator to two already evaluated values.
    ///
    /// Uses plain IEEE double arithmetic; `^` is `powf`. Division by zero is
    /// checked explicitly, and any other infinite or NaN result (overflow,
    /// `0^-1`, a fractional power of a negative base) is rejected.
    ///
    /// # Example
    /// ```
    /// use infix::{
    ///     ast::BinaryOperator,
    ///     error::EvalError,
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 5.0, 0.0),
    ///            Err(EvalError::DivisionByZeroOrOverflow));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let value = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZeroOrOverflow);
                }
                left / right
            },
            Pow => left.powf(right),
        };
        check_finite(value)
    }
}
