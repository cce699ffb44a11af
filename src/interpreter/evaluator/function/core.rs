use bigdecimal::BigDecimal;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, min_max, sqrt},
        },
        value::context::MathContext,
    },
};

/// A function callable from formulas.
///
/// Functions receive their arguments already evaluated, in source order,
/// together with the caller's arithmetic context. Any closure or `fn` with
/// the matching signature is a `Function`, so host code can register plain
/// closures with
/// [`Evaluator::register_function`](crate::interpreter::evaluator::core::Evaluator::register_function).
pub trait Function {
    /// Invokes the function.
    ///
    /// # Errors
    /// Whatever the function reports, typically
    /// [`EvalError::ArityMismatch`] or a domain error.
    fn call(&self, args: &[BigDecimal], context: &MathContext) -> EvalResult<BigDecimal>;
}

impl<F> Function for F
    where F: Fn(&[BigDecimal], &MathContext) -> EvalResult<BigDecimal>
{
    fn call(&self, args: &[BigDecimal], context: &MathContext) -> EvalResult<BigDecimal> {
        self(args, context)
    }
}

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the caller's
/// arithmetic context. Each builtin checks its own argument count.
type BuiltinFn = fn(&[BigDecimal], &MathContext) -> EvalResult<BigDecimal>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table installed into every evaluator),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of the functions every new evaluator starts with.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"   => builtin::abs,
    "sum"   => builtin::sum,
    "floor" => builtin::floor,
    "ceil"  => builtin::ceil,
    "round" => builtin::round,
    "min"   => min_max::min,
    "max"   => min_max::max,
    "sqrt"  => sqrt::sqrt,
}

/// Registers every builtin function on `evaluator`.
pub(crate) fn install_builtins(evaluator: &mut Evaluator) {
    for builtin in BUILTIN_TABLE {
        evaluator.register_function(builtin.name, builtin.func);
    }
}

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// The function is looked up first, so calling an unknown name evaluates
    /// none of the arguments. Arguments are then evaluated left to right and
    /// passed to the function with the current context.
    ///
    /// # Errors
    /// - [`EvalError::UndefinedFunction`] for an unknown name.
    /// - Errors from evaluating the arguments or from the function itself.
    pub(crate) fn eval_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<BigDecimal> {
        let function =
            self.functions
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedFunction { name: name.to_string() })?;

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        function.call(&values, &self.context)
    }
}
