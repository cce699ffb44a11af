use std::{num::NonZeroU64, rc::Rc};

use bigdecimal::{BigDecimal, RoundingMode};
use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::function::core::{Function, install_builtins},
        value::context::MathContext,
    },
    util::{folded_map::FoldedMap, num::decimal_from_f64},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A tree-walking evaluator for formula expressions.
///
/// The evaluator owns the interpreter state: variable bindings, the function
/// registry and the arithmetic context every result is rounded with. Names of
/// both variables and functions are case-insensitive.
///
/// ## Usage
///
/// An `Evaluator` is created once and reused; assignments made by one
/// evaluation are visible to the next. A fresh evaluator has no variables and
/// only the builtin functions (`abs`, `sum`, `floor`, `ceil`, `round`, `min`,
/// `max`, `sqrt`).
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::interpreter::{evaluator::core::Evaluator, lexer::tokenize, parser::core::parse};
///
/// let mut evaluator = Evaluator::new();
/// let tree = parse(&tokenize("x = 2 * 21").unwrap()).unwrap();
///
/// assert_eq!(evaluator.eval(&tree).unwrap(), BigDecimal::from(42));
/// assert_eq!(evaluator.variable("X"), Some(&BigDecimal::from(42)));
/// ```
pub struct Evaluator {
    /// Variable bindings, keyed by folded name.
    pub(crate) variables: FoldedMap<BigDecimal>,
    /// Callable functions, keyed by folded name.
    pub(crate) functions: FoldedMap<Rc<dyn Function>>,
    /// Precision and rounding applied to every arithmetic result.
    pub(crate) context:   MathContext,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::with_context(MathContext::default())
    }
}

impl Evaluator {
    /// Creates an evaluator with the default context (16 significant digits,
    /// half-up rounding) and the builtin functions installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given arithmetic context and the builtin
    /// functions installed.
    #[must_use]
    pub fn with_context(context: MathContext) -> Self {
        let mut evaluator = Self { variables: FoldedMap::new(),
                                   functions: FoldedMap::new(),
                                   context };
        install_builtins(&mut evaluator);
        evaluator
    }

    /// Returns the arithmetic context in effect.
    #[must_use]
    pub const fn math_context(&self) -> MathContext {
        self.context
    }

    /// Replaces the arithmetic context. Affects only later evaluations.
    pub fn set_math_context(&mut self, context: MathContext) {
        debug!(precision = %context.precision,
               rounding = ?context.rounding,
               "changing arithmetic context");
        self.context = context;
    }

    /// Changes the number of significant digits kept by results.
    pub fn set_precision(&mut self, precision: NonZeroU64) {
        self.set_math_context(MathContext { precision,
                                            ..self.context });
    }

    /// Changes the rounding mode applied to results.
    pub fn set_rounding_mode(&mut self, rounding: RoundingMode) {
        self.set_math_context(MathContext { rounding,
                                            ..self.context });
    }

    /// Evaluates `value` and binds the result to `name`.
    ///
    /// # Errors
    /// Any error raised while evaluating `value`; the binding is left
    /// unchanged in that case.
    pub fn define(&mut self, name: &str, value: &Expr) -> EvalResult<()> {
        let value = self.eval(value)?;
        self.set_variable(name, value);
        Ok(())
    }

    /// Binds an already computed value to `name`, replacing any previous
    /// binding.
    pub fn set_variable(&mut self, name: &str, value: BigDecimal) {
        trace!(name, %value, "binding variable");
        self.variables.insert(name, value);
    }

    /// Returns the value bound to `name`, ignoring case.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&BigDecimal> {
        self.variables.get(name)
    }

    /// Iterates over all variable bindings. Names are reported in lower case.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &BigDecimal)> {
        self.variables.iter()
    }

    /// Registers `function` under `name`, replacing any function (builtin or
    /// not) registered under the same name.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use decalc::interpreter::{
    ///     evaluator::core::{EvalResult, Evaluator},
    ///     lexer::tokenize,
    ///     parser::core::parse,
    ///     value::context::MathContext,
    /// };
    ///
    /// fn double(args: &[BigDecimal], _: &MathContext) -> EvalResult<BigDecimal> {
    ///     Ok(args.iter().map(|a| a * BigDecimal::from(2)).sum())
    /// }
    ///
    /// let mut evaluator = Evaluator::new();
    /// evaluator.register_function("double", double);
    ///
    /// let tree = parse(&tokenize("DOUBLE(4)").unwrap()).unwrap();
    /// assert_eq!(evaluator.eval(&tree).unwrap(), BigDecimal::from(8));
    /// ```
    pub fn register_function(&mut self, name: &str, function: impl Function + 'static) {
        debug!(name, "registering function");
        self.functions.insert(name, Rc::new(function));
    }

    /// Returns `true` if a function is registered under `name`, ignoring case.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right; `||` and `&&` skip their right operand when
    /// the left one decides the result.
    ///
    /// # Errors
    /// - [`EvalError::UndefinedVariable`] or [`EvalError::UndefinedFunction`]
    ///   for unknown names.
    /// - [`EvalError::InvalidOperator`] for an operator the node kind does not
    ///   support (only possible in hand-built trees).
    /// - Arithmetic and argument errors raised by operators and functions.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<BigDecimal> {
        match expr {
            Expr::Literal { value } => self.eval_literal(*value),
            Expr::Variable { name } => self.eval_variable(&name.lexeme),
            Expr::Assign { name, value } => self.eval_assign(&name.lexeme, value),
            Expr::Grouping { inner } => self.eval(inner),
            Expr::Unary { operator, right } => self.eval_unary_op(*operator, right),
            Expr::Binary { left,
                           operator,
                           right, } => self.eval_binary_op(left, *operator, right),
            Expr::Logical { left,
                            operator,
                            right, } => self.eval_logical(left, *operator, right),
            Expr::Call { name, arguments } => self.eval_call(name, arguments),
        }
    }

    fn eval_literal(&self, value: f64) -> EvalResult<BigDecimal> {
        decimal_from_f64(value).map(|decimal| self.context.round(&decimal))
                               .ok_or(EvalError::Overflow { operation: "number literal" })
    }

    fn eval_variable(&self, name: &str) -> EvalResult<BigDecimal> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<BigDecimal> {
        let value = self.eval(value)?;
        self.set_variable(name, value.clone());
        Ok(value)
    }
}
