use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::TokenKind,
    },
};

impl Evaluator {
    /// Evaluates both operands of a binary node, left first, and applies the
    /// operator.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 operator: TokenKind,
                                 right: &Expr)
                                 -> EvalResult<BigDecimal> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        self.eval_binary(operator, &left, &right)
    }

    /// Applies a binary operator to two values.
    ///
    /// Arithmetic results are rounded to the evaluator's context. Comparisons
    /// yield `1` or `0`. `^` delegates to [`Evaluator::eval_pow`].
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] for `/` or `%` with a zero divisor.
    /// - [`EvalError::InvalidOperator`] for a token kind that is not a binary
    ///   operator.
    /// - [`EvalError::Overflow`] when a result's exponent exceeds the context
    ///   limits.
    /// - Errors of exponentiation.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use decalc::interpreter::{evaluator::core::Evaluator, lexer::TokenKind};
    ///
    /// let evaluator = Evaluator::new();
    /// let seven = BigDecimal::from(7);
    /// let two = BigDecimal::from(2);
    ///
    /// let result = evaluator.eval_binary(TokenKind::Modulo, &seven, &two);
    /// assert_eq!(result.unwrap(), BigDecimal::from(1));
    ///
    /// let result = evaluator.eval_binary(TokenKind::Comma, &seven, &two);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(&self,
                       operator: TokenKind,
                       left: &BigDecimal,
                       right: &BigDecimal)
                       -> EvalResult<BigDecimal> {
        use TokenKind::{
            Equal, Exponent, Greater, GreaterEqual, Less, LessEqual, Minus, Modulo, NotEqual,
            Plus, Slash, Star,
        };

        match operator {
            Plus => self.context.finish(&(left + right), "addition"),
            Minus => self.context.finish(&(left - right), "subtraction"),
            Star => self.context.finish(&(left * right), "multiplication"),
            Slash => {
                let quotient = self.context.divide(left, right)?;
                self.context.finish(&quotient, "division")
            },
            Modulo => {
                Self::check_divisor(right)?;
                self.context.finish(&(left % right), "remainder")
            },
            Exponent => self.eval_pow(left, right),
            Equal | NotEqual | Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(operator, left, right)
            },
            other => Err(EvalError::InvalidOperator { operator: other.symbol().to_string(),
                                                      node:     "binary", }),
        }
    }

    fn check_divisor(divisor: &BigDecimal) -> EvalResult<()> {
        if divisor.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        Ok(())
    }
}
