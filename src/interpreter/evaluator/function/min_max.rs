use std::cmp::Ordering;

use bigdecimal::BigDecimal;

use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        utils::{Arity, check_arity},
    },
    value::context::MathContext,
};

/// Returns the smallest of one or more arguments.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::{
///     evaluator::function::min_max::min, value::context::MathContext,
/// };
///
/// let args = [BigDecimal::from(3), BigDecimal::from(-7), BigDecimal::from(5)];
/// assert_eq!(min(&args, &MathContext::default()).unwrap(), BigDecimal::from(-7));
/// ```
pub fn min(args: &[BigDecimal], _context: &MathContext) -> EvalResult<BigDecimal> {
    min_max("min", args, Ordering::Less)
}

/// Returns the largest of one or more arguments.
pub fn max(args: &[BigDecimal], _context: &MathContext) -> EvalResult<BigDecimal> {
    min_max("max", args, Ordering::Greater)
}

/// Picks the argument that orders `wanted` against every other one. Among
/// equal extremes the first wins. The value is returned unrounded.
fn min_max(name: &str, args: &[BigDecimal], wanted: Ordering) -> EvalResult<BigDecimal> {
    check_arity(name, args, Arity::AtLeast(1))?;

    let extreme = args[1..].iter().fold(&args[0], |extreme, value| {
                                      if value.cmp(extreme) == wanted { value } else { extreme }
                                  });

    Ok(extreme.clone())
}
