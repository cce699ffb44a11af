use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{
            context::{MAX_EXPONENT, MIN_EXPONENT, adjusted_exponent},
            format::to_normalized_string,
        },
    },
    util::num::{decimal_from_f64, decimal_to_f64},
};

const OVERFLOW: EvalError = EvalError::Overflow { operation: "exponentiation" };

/// Estimated result exponents past these bounds skip the computation.
#[allow(clippy::cast_precision_loss)]
const EXPONENT_BOUND_HIGH: f64 = (MAX_EXPONENT + 1) as f64;
#[allow(clippy::cast_precision_loss)]
const EXPONENT_BOUND_LOW: f64 = (MIN_EXPONENT - 1) as f64;

impl Evaluator {
    /// Raises `base` to `exponent`.
    ///
    /// The exponent is split into its integer part and its fraction. The
    /// integer part is applied in decimal arithmetic at the context's
    /// precision; the fraction is applied in `f64`. A negative exponent
    /// takes the reciprocal of the result. Any base raised to zero is `1`.
    ///
    /// Before any digits are computed the result's magnitude is estimated,
    /// so powers far outside the exponent limits fail or flush to zero at
    /// once.
    ///
    /// # Errors
    /// - [`EvalError::Domain`] when a negative base meets a fractional
    ///   exponent.
    /// - [`EvalError::Overflow`] when the result's exponent would exceed the
    ///   limit, or an operand leaves the `f64` range where float math is
    ///   needed.
    /// - [`EvalError::DivisionByZero`] for zero raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use decalc::interpreter::evaluator::core::Evaluator;
    ///
    /// let evaluator = Evaluator::new();
    /// let two = BigDecimal::from(2);
    ///
    /// let result = evaluator.eval_pow(&two, &BigDecimal::from(10)).unwrap();
    /// assert_eq!(result, BigDecimal::from(1024));
    ///
    /// let result = evaluator.eval_pow(&two, &BigDecimal::from(-2)).unwrap();
    /// assert_eq!(result, BigDecimal::from_str("0.25").unwrap());
    ///
    /// let result = evaluator.eval_pow(&two, &BigDecimal::from_str("0.5").unwrap()).unwrap();
    /// assert_eq!(result, BigDecimal::from_str("1.414213562373095").unwrap());
    ///
    /// let ten = BigDecimal::from(10);
    /// assert!(evaluator.eval_pow(&ten, &BigDecimal::from(1_000_000)).is_err());
    /// ```
    pub fn eval_pow(&self, base: &BigDecimal, exponent: &BigDecimal) -> EvalResult<BigDecimal> {
        if exponent.is_zero() {
            return Ok(BigDecimal::one());
        }

        let magnitude = exponent.abs();
        let whole = magnitude.with_scale_round(0, RoundingMode::Down);
        let fraction = &magnitude - &whole;

        if base.is_negative() && !fraction.is_zero() {
            return Err(EvalError::Domain { operation: "exponentiation",
                                           details:   format!("negative base {} with fractional exponent",
                                                              to_normalized_string(base)), });
        }
        if base.is_zero() {
            return if exponent.is_negative() {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(BigDecimal::zero())
            };
        }
        if base.abs().is_one() {
            return Ok(Self::pow_unit(base, &whole));
        }

        let estimate = result_exponent_estimate(base, exponent);
        if estimate > EXPONENT_BOUND_HIGH {
            return Err(OVERFLOW);
        }
        if estimate < EXPONENT_BOUND_LOW {
            return Ok(BigDecimal::zero());
        }

        let times = whole.to_i64().ok_or(OVERFLOW)?;
        let mut result = if times == 0 {
            BigDecimal::one()
        } else {
            base.powi_with_context(times, &self.context.decimal_context())
        };

        if !fraction.is_zero() {
            result = self.context.round(&(result * self.pow_fraction(base, &fraction)?));
        }

        if exponent.is_negative() {
            result = self.context.divide(&BigDecimal::one(), &result)?;
        }

        self.context.finish(&result, "exponentiation")
    }

    /// `1` or `-1` raised to an integer power.
    fn pow_unit(base: &BigDecimal, whole: &BigDecimal) -> BigDecimal {
        let odd = base.is_negative() && !(whole % BigDecimal::from(2)).is_zero();
        if odd { -BigDecimal::one() } else { BigDecimal::one() }
    }

    /// `base ^ fraction` for `0 < fraction < 1` and a positive base,
    /// computed in `f64`.
    fn pow_fraction(&self, base: &BigDecimal, fraction: &BigDecimal) -> EvalResult<BigDecimal> {
        let base = decimal_to_f64(base).ok_or(OVERFLOW)?;
        let fraction = decimal_to_f64(fraction).ok_or(OVERFLOW)?;

        decimal_from_f64(base.powf(fraction)).map(|value| self.context.round(&value))
                                             .ok_or(OVERFLOW)
    }
}

/// Approximate `log10(|base| ^ exponent)`, the adjusted exponent of the
/// power. `NaN` when `|base|` is too close to one to tell.
#[allow(clippy::cast_precision_loss)]
fn result_exponent_estimate(base: &BigDecimal, exponent: &BigDecimal) -> f64 {
    let Some(adjusted) = adjusted_exponent(base) else {
        return f64::NEG_INFINITY;
    };

    let (digits, _) = base.as_bigint_and_exponent();
    let leading = i64::try_from(base.digits().saturating_sub(1)).unwrap_or(i64::MAX);
    let mantissa = BigDecimal::new(digits.abs(), leading).to_f64().unwrap_or(1.0);
    let log10 = adjusted as f64 + mantissa.log10();

    let exponent = decimal_to_f64(exponent).unwrap_or(if exponent.is_negative() {
                                                          f64::NEG_INFINITY
                                                      } else {
                                                          f64::INFINITY
                                                      });
    log10 * exponent
}
