use std::fmt;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Returns `true` for every value except zero.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::evaluator::utils::is_truthy;
///
/// assert!(is_truthy(&BigDecimal::from(-3)));
/// assert!(!is_truthy(&BigDecimal::from(0)));
/// ```
#[must_use]
pub fn is_truthy(value: &BigDecimal) -> bool {
    !value.is_zero()
}

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `AtLeast(n)` means `n` or more arguments.
/// - `OneOf(slice)` means any count listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::OneOf(counts) => counts.contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: usize| if n == 1 { "argument" } else { "arguments" };
        match self {
            Self::Exact(n) => write!(f, "exactly {n} {}", plural(*n)),
            Self::AtLeast(n) => write!(f, "at least {n} {}", plural(*n)),
            Self::OneOf(counts) => {
                let Some((last, rest)) = counts.split_last() else {
                    return f.write_str("no arguments");
                };
                let rest = rest.iter().map(ToString::to_string).collect::<Vec<_>>();
                if rest.is_empty() {
                    write!(f, "{last} {}", plural(*last))
                } else {
                    write!(f, "{} or {last} arguments", rest.join(", "))
                }
            },
        }
    }
}

/// Ensures that `name` was called with an acceptable number of arguments.
///
/// # Errors
/// [`EvalError::ArityMismatch`] naming the function, the accepted counts and
/// the count received.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::evaluator::utils::{Arity, check_arity};
///
/// let args = [BigDecimal::from(1), BigDecimal::from(2)];
/// assert!(check_arity("round", &args, Arity::OneOf(&[1, 2])).is_ok());
///
/// let err = check_arity("abs", &args, Arity::Exact(1)).unwrap_err();
/// assert_eq!(err.to_string(), "abs requires exactly 1 argument, found 2.");
/// ```
pub fn check_arity(name: &str, args: &[BigDecimal], arity: Arity) -> EvalResult<()> {
    if arity.check(args.len()) {
        return Ok(());
    }
    Err(EvalError::ArityMismatch { name:     name.to_string(),
                                   expected: arity.to_string(),
                                   found:    args.len(), })
}
