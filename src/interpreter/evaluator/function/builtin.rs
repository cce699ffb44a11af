use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{Arity, check_arity},
        },
        value::{
            context::{MAX_EXPONENT, MIN_EXPONENT, MathContext, adjusted_exponent},
            format::to_normalized_string,
        },
    },
    util::num::is_integral,
};

/// Absolute value of its single argument.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::{
///     evaluator::function::builtin::abs, value::context::MathContext,
/// };
///
/// let value = BigDecimal::from_str("-2.5").unwrap();
/// let result = abs(&[value], &MathContext::default()).unwrap();
/// assert_eq!(result, BigDecimal::from_str("2.5").unwrap());
/// ```
pub fn abs(args: &[BigDecimal], context: &MathContext) -> EvalResult<BigDecimal> {
    check_arity("abs", args, Arity::Exact(1))?;
    Ok(context.round(&args[0].abs()))
}

/// Sum of one or more arguments, rounded once at the end.
pub fn sum(args: &[BigDecimal], context: &MathContext) -> EvalResult<BigDecimal> {
    check_arity("sum", args, Arity::AtLeast(1))?;
    let total = args.iter().fold(BigDecimal::zero(), |total, value| total + value);
    context.finish(&total, "sum")
}

/// Generates a builtin that rounds its single argument to an integer with a
/// fixed rounding direction, ignoring the context's rounding mode.
macro_rules! integral_builtin {
    ($(#[$doc:meta])* $fname:ident, $mode:expr) => {
        $(#[$doc])*
        pub fn $fname(args: &[BigDecimal], _context: &MathContext) -> EvalResult<BigDecimal> {
            check_arity(stringify!($fname), args, Arity::Exact(1))?;
            Ok(args[0].with_scale_round(0, $mode))
        }
    };
}

integral_builtin!(
    /// Largest integer not greater than the argument.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use decalc::interpreter::{
    ///     evaluator::function::builtin::floor, value::context::MathContext,
    /// };
    ///
    /// let value = BigDecimal::from_str("-2.5").unwrap();
    /// let result = floor(&[value], &MathContext::default()).unwrap();
    /// assert_eq!(result, BigDecimal::from(-3));
    /// ```
    floor, RoundingMode::Floor
);
integral_builtin!(
    /// Smallest integer not less than the argument.
    ceil, RoundingMode::Ceiling
);

/// Rounds to a number of decimal places using the context's rounding mode.
///
/// `round(x)` rounds to an integer, `round(x, n)` keeps `n` digits after the
/// decimal point. A negative `n` rounds to tens, hundreds, and so on.
///
/// # Errors
/// - [`EvalError::ArityMismatch`] unless called with one or two arguments.
/// - [`EvalError::InvalidArgument`] if `n` is not an integer, lies outside
///   the exponent limits, or the rounded value needs more significant digits
///   than the context's precision.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::{
///     evaluator::function::builtin::round, value::context::MathContext,
/// };
///
/// let context = MathContext::default();
/// let value = BigDecimal::from_str("2.345").unwrap();
///
/// let result = round(&[value.clone(), BigDecimal::from(2)], &context).unwrap();
/// assert_eq!(result, BigDecimal::from_str("2.35").unwrap());
///
/// let result = round(&[value], &context).unwrap();
/// assert_eq!(result, BigDecimal::from(2));
/// ```
pub fn round(args: &[BigDecimal], context: &MathContext) -> EvalResult<BigDecimal> {
    check_arity("round", args, Arity::OneOf(&[1, 2]))?;

    let value = &args[0];
    let places = match args.get(1) {
        Some(places) => decimal_places(places)?,
        None => 0,
    };

    let too_long = || {
        EvalError::InvalidArgument { name:    "round",
                                     details: format!("{} with {places} decimal places needs more than {} \
                                                       digits",
                                                      to_normalized_string(value),
                                                      context.precision), }
    };
    let needed = adjusted_exponent(value).map_or(0, |exponent| exponent + 1 + i128::from(places));
    if needed > i128::from(context.precision.get()) {
        return Err(too_long());
    }

    let rounded = value.with_scale_round(places, context.rounding);
    if rounded.digits() > context.precision.get() {
        return Err(too_long());
    }
    Ok(rounded)
}

fn decimal_places(value: &BigDecimal) -> EvalResult<i64> {
    let invalid = |reason: &str| EvalError::InvalidArgument { name:    "round",
                                                              details: format!("decimal places {} {reason}",
                                                                               to_normalized_string(value)), };
    if !is_integral(value) {
        return Err(invalid("must be an integer"));
    }
    value.to_i64()
         .filter(|places| (MIN_EXPONENT..=MAX_EXPONENT).contains(places))
         .ok_or_else(|| invalid("is out of range"))
}
