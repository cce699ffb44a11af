use bigdecimal::BigDecimal;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::sqrt::float_sqrt,
        },
        lexer::TokenKind,
    },
};

impl Evaluator {
    /// Evaluates the operand of a unary node and applies the operator.
    pub(crate) fn eval_unary_op(&mut self,
                                operator: TokenKind,
                                right: &Expr)
                                -> EvalResult<BigDecimal> {
        let value = self.eval(right)?;
        self.eval_unary(operator, &value)
    }

    /// Applies a unary operator to a value.
    ///
    /// `-` negates. `√` takes the square root, computed in `f64` and rounded
    /// to the context.
    ///
    /// # Errors
    /// - [`EvalError::Domain`] for the square root of a negative value.
    /// - [`EvalError::InvalidOperator`] for any other operator.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use decalc::interpreter::{evaluator::core::Evaluator, lexer::TokenKind};
    ///
    /// let evaluator = Evaluator::new();
    ///
    /// let result = evaluator.eval_unary(TokenKind::SquareRoot, &BigDecimal::from(81));
    /// assert_eq!(result.unwrap(), BigDecimal::from(9));
    ///
    /// let result = evaluator.eval_unary(TokenKind::Minus, &BigDecimal::from(5));
    /// assert_eq!(result.unwrap(), BigDecimal::from(-5));
    /// ```
    pub fn eval_unary(&self, operator: TokenKind, value: &BigDecimal) -> EvalResult<BigDecimal> {
        match operator {
            TokenKind::Minus => Ok(self.context.round(&-value.clone())),
            TokenKind::SquareRoot => float_sqrt("square root", value, &self.context),
            other => Err(EvalError::InvalidOperator { operator: other.symbol().to_string(),
                                                      node:     "unary", }),
        }
    }
}
