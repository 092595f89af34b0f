use crate::{
    ast::Expr,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates `-expr`. Negating a finite value is always finite.
    pub(crate) fn eval_unary_minus(&self, expr: &Expr) -> EvalResult<f64> {
        Ok(-self.eval(expr)?)
    }
}
