use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{One, ToPrimitive, Zero};

/// Converts an `f64` to the decimal with the same shortest text.
///
/// The conversion goes through the float's shortest round-trip spelling, so
/// `0.1` becomes exactly `0.1` rather than the binary expansion
/// `0.1000000000000000055511151231257827...`.
///
/// # Returns
/// - `Some(BigDecimal)`: For every finite value.
/// - `None`: For infinities and NaN.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::util::num::decimal_from_f64;
///
/// assert_eq!(decimal_from_f64(0.1), Some(BigDecimal::from_str("0.1").unwrap()));
/// assert_eq!(decimal_from_f64(2.5e-8), Some(BigDecimal::from_str("0.000000025").unwrap()));
/// assert_eq!(decimal_from_f64(f64::INFINITY), None);
/// ```
#[must_use]
pub fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&format!("{value:e}")).ok()
}

/// Converts a decimal to the nearest `f64`.
///
/// # Returns
/// - `Some(f64)`: The nearest float, for values inside the `f64` range.
/// - `None`: When the value overflows to an infinity.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::util::num::decimal_to_f64;
///
/// let half = BigDecimal::from_str("0.5").unwrap();
/// assert_eq!(decimal_to_f64(&half), Some(0.5));
///
/// let huge = BigDecimal::from_str("1e400").unwrap();
/// assert_eq!(decimal_to_f64(&huge), None);
/// ```
#[must_use]
pub fn decimal_to_f64(value: &BigDecimal) -> Option<f64> {
    value.to_f64().filter(|float| float.is_finite())
}

/// Returns `1` for `true` and `0` for `false`.
#[must_use]
pub fn bool_to_decimal(value: bool) -> BigDecimal {
    if value { BigDecimal::one() } else { BigDecimal::zero() }
}

/// Returns `true` if `value` has no fractional part.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::util::num::is_integral;
///
/// assert!(is_integral(&BigDecimal::from_str("12.000").unwrap()));
/// assert!(!is_integral(&BigDecimal::from_str("-0.5").unwrap()));
/// ```
#[must_use]
pub fn is_integral(value: &BigDecimal) -> bool {
    value.with_scale_round(0, RoundingMode::Down) == *value
}
