use bigdecimal::BigDecimal;
use num_traits::Signed;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{Arity, check_arity},
        },
        value::{context::MathContext, format::to_normalized_string},
    },
    util::num::{decimal_from_f64, decimal_to_f64},
};

/// Square root of its single argument.
///
/// The root is computed in `f64` and rounded to the context, so results carry
/// at most about 17 significant digits whatever the precision.
///
/// # Errors
/// - [`EvalError::Domain`] for a negative argument.
/// - [`EvalError::Overflow`] if the argument is outside the `f64` range.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::{
///     evaluator::function::sqrt::sqrt, value::context::MathContext,
/// };
///
/// let context = MathContext::default();
/// assert_eq!(sqrt(&[BigDecimal::from(16)], &context).unwrap(), BigDecimal::from(4));
/// assert!(sqrt(&[BigDecimal::from(-1)], &context).is_err());
/// ```
pub fn sqrt(args: &[BigDecimal], context: &MathContext) -> EvalResult<BigDecimal> {
    check_arity("sqrt", args, Arity::Exact(1))?;
    float_sqrt("sqrt", &args[0], context)
}

/// Square root through `f64`, reporting failures against `operation`.
pub(crate) fn float_sqrt(operation: &'static str,
                         value: &BigDecimal,
                         context: &MathContext)
                         -> EvalResult<BigDecimal> {
    if value.is_negative() {
        return Err(EvalError::Domain { operation,
                                       details: format!("{} is negative",
                                                        to_normalized_string(value)) });
    }

    let float = decimal_to_f64(value).ok_or(EvalError::Overflow { operation })?;
    decimal_from_f64(float.sqrt()).map(|root| context.round(&root))
                                  .ok_or(EvalError::Overflow { operation })
}
