use bigdecimal::BigDecimal;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::TokenKind,
    },
    util::num::bool_to_decimal,
};

impl Evaluator {
    /// Compares two values numerically, yielding `1` when the relation holds
    /// and `0` otherwise.
    ///
    /// Comparison is exact: `2.50` equals `2.5`, and no context rounding is
    /// applied to the operands.
    ///
    /// # Errors
    /// [`EvalError::InvalidOperator`] if `operator` is not a comparison.
    pub fn eval_comparison(operator: TokenKind,
                           left: &BigDecimal,
                           right: &BigDecimal)
                           -> EvalResult<BigDecimal> {
        let holds = match operator {
            TokenKind::Equal => left == right,
            TokenKind::NotEqual => left != right,
            TokenKind::Greater => left > right,
            TokenKind::GreaterEqual => left >= right,
            TokenKind::Less => left < right,
            TokenKind::LessEqual => left <= right,
            other => {
                return Err(EvalError::InvalidOperator { operator: other.symbol().to_string(),
                                                        node:     "comparison", });
            },
        };
        Ok(bool_to_decimal(holds))
    }
}
