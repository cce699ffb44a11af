use std::{f64::consts, num::NonZeroU64};

use bigdecimal::{BigDecimal, RoundingMode};
use tracing::{debug, error};

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::core::Function,
        },
        lexer::{Token, tokenize},
        parser::core::parse,
        value::{context::MathContext, format::to_normalized_string},
    },
};

/// Constants bound in every new calculator, as formula source.
const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

/// The complete formula pipeline behind one object.
///
/// A `Calculator` owns an [`Evaluator`] with the builtin functions, plus the
/// constants `pi` and `e`. Each call tokenizes, parses and evaluates one
/// formula; variables assigned by a formula stay bound for the next one.
///
/// # Example
/// ```
/// use decalc::interpreter::calculator::Calculator;
///
/// let mut calculator = Calculator::new();
///
/// assert_eq!(calculator.evaluate_to_string("rate = 0.25"), "0.25");
/// assert_eq!(calculator.evaluate_to_string("Rate * 8 + round(pi, 2)"), "5.14");
/// assert_eq!(calculator.evaluate_to_string("1 / 0"), "Division by zero.");
/// ```
pub struct Calculator {
    evaluator: Evaluator,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_context(MathContext::default())
    }
}

impl Calculator {
    /// Creates a calculator with the default context: 16 significant digits,
    /// half-up rounding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator whose results are rounded with `context`.
    ///
    /// The constants are evaluated under `context` too, so they carry at most
    /// its precision.
    #[must_use]
    pub fn with_context(context: MathContext) -> Self {
        let mut calculator = Self { evaluator: Evaluator::with_context(context) };

        for (name, value) in CONSTANTS {
            if let Err(e) = calculator.define(name, &value.to_string()) {
                error!(name, error = %e, "failed to define constant");
            }
        }

        calculator
    }

    /// Returns the arithmetic context in effect.
    #[must_use]
    pub const fn math_context(&self) -> MathContext {
        self.evaluator.math_context()
    }

    /// Changes the number of significant digits of later results.
    pub fn set_precision(&mut self, precision: NonZeroU64) {
        self.evaluator.set_precision(precision);
    }

    /// Changes the rounding mode of later results.
    pub fn set_rounding_mode(&mut self, rounding: RoundingMode) {
        self.evaluator.set_rounding_mode(rounding);
    }

    /// Evaluates the formula `source` and binds its value to `name`.
    ///
    /// # Errors
    /// Any lexing, parsing or evaluation error of `source`. Nothing is bound
    /// in that case.
    ///
    /// # Example
    /// ```
    /// use decalc::interpreter::calculator::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.define("tax", "7 / 100").unwrap();
    ///
    /// assert_eq!(calculator.evaluate_to_string("200 * (1 + TAX)"), "214");
    /// assert!(calculator.define("broken", "2 +").is_err());
    /// ```
    pub fn define(&mut self, name: &str, source: &str) -> Result<(), Error> {
        let expr = parse(&tokenize(source)?)?;
        Ok(self.evaluator.define(name, &expr)?)
    }

    /// Registers a function callable from formulas, replacing any function
    /// of the same name.
    pub fn register_function(&mut self, name: &str, function: impl Function + 'static) {
        self.evaluator.register_function(name, function);
    }

    /// Tokenizes, parses and evaluates `source`.
    ///
    /// # Errors
    /// The first lexing, parsing or evaluation error encountered.
    pub fn eval(&mut self, source: &str) -> Result<BigDecimal, Error> {
        let tokens = tokenize(source)?;
        self.eval_tokens(&tokens)
    }

    /// Parses and evaluates an already tokenized formula.
    ///
    /// # Errors
    /// The first parsing or evaluation error encountered.
    pub fn eval_tokens(&mut self, tokens: &[Token]) -> Result<BigDecimal, Error> {
        let expr = parse(tokens)?;
        Ok(self.eval_expr(&expr)?)
    }

    /// Evaluates an already parsed formula.
    ///
    /// # Errors
    /// Any evaluation error.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<BigDecimal> {
        self.evaluator.eval(expr)
    }

    /// Evaluates `source` and renders the outcome as text.
    ///
    /// A value is rendered in normalized form (trailing zeros removed, plain
    /// notation). A failure is rendered as its error message. This never
    /// panics and never returns an error.
    pub fn evaluate_to_string(&mut self, source: &str) -> String {
        match self.eval(source) {
            Ok(value) => to_normalized_string(&value),
            Err(e) => {
                debug!(source, error = %e, "formula failed");
                e.to_string()
            },
        }
    }

    /// Iterates over all variable bindings, constants included. Names are
    /// reported in lower case.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &BigDecimal)> {
        self.evaluator.variables()
    }

    /// Returns the value bound to `name`, ignoring case.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&BigDecimal> {
        self.evaluator.variable(name)
    }
}

/// Splits a formula script into its formulas.
///
/// A script holds one formula per line. Surrounding whitespace is trimmed;
/// blank lines and lines starting with `#` are skipped.
///
/// # Example
/// ```
/// use decalc::interpreter::calculator::formula_lines;
///
/// let script = "# totals\nnet = 100\n\n  net * 1.2  \n";
/// assert_eq!(formula_lines(script).collect::<Vec<_>>(), ["net = 100", "net * 1.2"]);
/// ```
pub fn formula_lines(script: &str) -> impl Iterator<Item = &str> {
    script.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
