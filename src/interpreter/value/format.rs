use bigdecimal::BigDecimal;
use num_bigint::Sign;

/// Exponents beyond this many digits are rendered in scientific notation
/// instead of being padded with zeros.
pub const MAX_PLAIN_EXPONENT: i64 = 1000;

/// Renders a decimal in normalized form.
///
/// Trailing zeros of the fraction are dropped and the result is written in
/// plain positional notation, e.g. `1.50` becomes `1.5` and `1E+2` becomes
/// `100`. Values whose exponent is too large to spell out fall back to
/// scientific notation.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::value::format::to_normalized_string;
///
/// let value = BigDecimal::from_str("120.500").unwrap();
/// assert_eq!(to_normalized_string(&value), "120.5");
///
/// let value = BigDecimal::from_str("-0.00250").unwrap();
/// assert_eq!(to_normalized_string(&value), "-0.0025");
///
/// let value = BigDecimal::from_str("2E+1").unwrap();
/// assert_eq!(to_normalized_string(&value), "20");
///
/// let value = BigDecimal::from_str("-1.50e2000").unwrap();
/// assert_eq!(to_normalized_string(&value), "-1.5E+2000");
/// ```
#[must_use]
pub fn to_normalized_string(value: &BigDecimal) -> String {
    let normalized = value.normalized();
    let (digits, scale) = normalized.as_bigint_and_exponent();

    let sign = if digits.sign() == Sign::Minus { "-" } else { "" };
    let magnitude = digits.magnitude().to_string();

    if scale.abs() > MAX_PLAIN_EXPONENT {
        let adjusted = i128::from(normalized.digits()) - i128::from(scale) - 1;
        let (lead, rest) = magnitude.split_at(1);
        let point = if rest.is_empty() { "" } else { "." };
        return format!("{sign}{lead}{point}{rest}E{adjusted:+}");
    }

    let body = match usize::try_from(scale) {
        Ok(0) => magnitude,
        Ok(scale) if magnitude.len() > scale => {
            let (whole, fraction) = magnitude.split_at(magnitude.len() - scale);
            format!("{whole}.{fraction}")
        },
        Ok(scale) => format!("0.{}{magnitude}", "0".repeat(scale - magnitude.len())),
        Err(_) => {
            let zeros = scale.unsigned_abs();
            format!("{magnitude}{}", "0".repeat(usize::try_from(zeros).unwrap_or_default()))
        },
    };

    format!("{sign}{body}")
}
