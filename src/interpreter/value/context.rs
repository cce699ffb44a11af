use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::EvalError;

/// Number of significant digits (16) used when no precision is configured.
pub const DEFAULT_PRECISION: NonZeroU64 = NonZeroU64::MIN.saturating_add(15);
/// Rounding mode used when none is configured.
pub const DEFAULT_ROUNDING: RoundingMode = RoundingMode::HalfUp;
/// Largest adjusted exponent a result may carry.
pub const MAX_EXPONENT: i64 = 999_999;
/// Smallest adjusted exponent a nonzero result may carry. Smaller results
/// flush to zero.
pub const MIN_EXPONENT: i64 = -999_999;

/// Extra quotient digits computed before the final rounding.
const DIVISION_GUARD_DIGITS: u64 = 3;

/// The arithmetic context of an evaluator: how many significant digits a
/// result keeps and how the discarded digits are rounded.
///
/// # Example
/// ```
/// use std::{num::NonZeroU64, str::FromStr};
///
/// use bigdecimal::{BigDecimal, RoundingMode};
/// use decalc::interpreter::value::context::MathContext;
///
/// let context = MathContext::new(NonZeroU64::new(3).unwrap(), RoundingMode::HalfUp);
/// let value = BigDecimal::from_str("2.71828").unwrap();
///
/// assert_eq!(context.round(&value), BigDecimal::from_str("2.72").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    /// Significant digits kept by every rounded result.
    pub precision: NonZeroU64,
    /// How results are rounded to `precision` digits.
    pub rounding:  RoundingMode,
}

impl Default for MathContext {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, DEFAULT_ROUNDING)
    }
}

impl MathContext {
    /// Creates a context with the given precision and rounding mode.
    #[must_use]
    pub const fn new(precision: NonZeroU64, rounding: RoundingMode) -> Self {
        Self { precision, rounding }
    }

    /// Rounds `value` to this context's precision.
    #[must_use]
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        value.with_precision_round(self.precision, self.rounding)
    }

    /// Rounds the result of `operation` and applies the exponent limits.
    ///
    /// # Errors
    /// [`EvalError::Overflow`] when the rounded value's adjusted exponent is
    /// above [`MAX_EXPONENT`]. Values below [`MIN_EXPONENT`] become zero.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use decalc::interpreter::value::context::MathContext;
    ///
    /// let context = MathContext::default();
    ///
    /// let tiny = BigDecimal::from_str("1e-1000000").unwrap();
    /// assert_eq!(context.finish(&tiny, "multiplication"), Ok(BigDecimal::from(0)));
    ///
    /// let huge = BigDecimal::from_str("1e1000000").unwrap();
    /// assert!(context.finish(&huge, "multiplication").is_err());
    /// ```
    pub fn finish(&self,
                  value: &BigDecimal,
                  operation: &'static str)
                  -> Result<BigDecimal, EvalError> {
        let rounded = self.round(value);
        match adjusted_exponent(&rounded) {
            Some(exponent) if exponent > i128::from(MAX_EXPONENT) => {
                Err(EvalError::Overflow { operation })
            },
            Some(exponent) if exponent < i128::from(MIN_EXPONENT) => Ok(BigDecimal::zero()),
            _ => Ok(rounded),
        }
    }

    /// Divides `dividend` by `divisor`, keeping enough digits for the result
    /// to round correctly to this context.
    ///
    /// The quotient is truncated a few digits past the precision and a
    /// sticky digit marks an inexact remainder, so a single later rounding
    /// gives the correctly rounded quotient under every rounding mode. The
    /// result is not rounded.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] for a zero divisor.
    /// - [`EvalError::Overflow`] when the quotient's scale leaves the `i64`
    ///   range.
    ///
    /// # Example
    /// ```
    /// use std::{num::NonZeroU64, str::FromStr};
    ///
    /// use bigdecimal::{BigDecimal, RoundingMode};
    /// use decalc::interpreter::value::context::MathContext;
    ///
    /// let context = MathContext::new(NonZeroU64::new(2).unwrap(), RoundingMode::HalfUp);
    /// let quotient = context.divide(&BigDecimal::from(3), &BigDecimal::from(24)).unwrap();
    ///
    /// assert_eq!(context.round(&quotient), BigDecimal::from_str("0.13").unwrap());
    /// ```
    pub fn divide(&self,
                  dividend: &BigDecimal,
                  divisor: &BigDecimal)
                  -> Result<BigDecimal, EvalError> {
        if divisor.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        if dividend.is_zero() {
            return Ok(BigDecimal::zero());
        }

        let overflow = || EvalError::Overflow { operation: "division" };
        let (numerator, numerator_scale) = dividend.as_bigint_and_exponent();
        let (denominator, denominator_scale) = divisor.as_bigint_and_exponent();

        let shift = self.precision
                        .get()
                        .saturating_add(DIVISION_GUARD_DIGITS)
                        .saturating_add(divisor.digits())
                        .saturating_sub(dividend.digits());
        let shift = u32::try_from(shift).map_err(|_| overflow())?;

        let scaled = numerator.magnitude() * BigUint::from(10u8).pow(shift);
        let mut quotient = &scaled / denominator.magnitude();
        let mut scale = numerator_scale.checked_sub(denominator_scale)
                                       .and_then(|scale| scale.checked_add(i64::from(shift)))
                                       .ok_or_else(overflow)?;

        if !(&scaled % denominator.magnitude()).is_zero() {
            quotient = quotient * 10u8 + 1u8;
            scale = scale.checked_add(1).ok_or_else(overflow)?;
        }

        let sign = if numerator.sign() == denominator.sign() { Sign::Plus } else { Sign::Minus };
        Ok(BigDecimal::new(BigInt::from_biguint(sign, quotient), scale))
    }

    /// The same precision and rounding as a [`bigdecimal::Context`].
    #[must_use]
    pub fn decimal_context(&self) -> Context {
        Context::new(self.precision, self.rounding)
    }
}

/// The exponent of a value's leading digit, e.g. `2` for `123.4` and `-3`
/// for `0.00125`. `None` for zero.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::value::context::adjusted_exponent;
///
/// assert_eq!(adjusted_exponent(&BigDecimal::from_str("123.4").unwrap()), Some(2));
/// assert_eq!(adjusted_exponent(&BigDecimal::from_str("0.00125").unwrap()), Some(-3));
/// assert_eq!(adjusted_exponent(&BigDecimal::from(0)), None);
/// ```
#[must_use]
pub fn adjusted_exponent(value: &BigDecimal) -> Option<i128> {
    if value.is_zero() {
        return None;
    }
    Some(i128::from(value.digits()) - i128::from(value.fractional_digit_count()) - 1)
}
