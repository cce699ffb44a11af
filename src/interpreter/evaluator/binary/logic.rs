use bigdecimal::BigDecimal;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::is_truthy,
        },
        lexer::TokenKind,
    },
    util::num::bool_to_decimal,
};

impl Evaluator {
    /// Evaluates `||` and `&&` with short-circuiting.
    ///
    /// The left operand is always evaluated. The right operand is evaluated
    /// only when the left one does not decide the result, so its side effects
    /// (assignments, function calls) and errors are skipped otherwise. The
    /// result is `1` or `0`.
    ///
    /// # Errors
    /// [`EvalError::InvalidOperator`] for any other operator, raised before
    /// either operand is evaluated.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               operator: TokenKind,
                               right: &Expr)
                               -> EvalResult<BigDecimal> {
        let short_circuit_on = match operator {
            TokenKind::LogicalOr => true,
            TokenKind::LogicalAnd => false,
            other => {
                return Err(EvalError::InvalidOperator { operator: other.symbol().to_string(),
                                                        node:     "logical", });
            },
        };

        if is_truthy(&self.eval(left)?) == short_circuit_on {
            return Ok(bool_to_decimal(short_circuit_on));
        }

        let right = self.eval(right)?;
        Ok(bool_to_decimal(is_truthy(&right)))
    }
}
