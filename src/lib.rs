//! # decalc
//!
//! decalc is a high-precision decimal formula language written in Rust.
//! It tokenizes, parses and evaluates single-line formulas with variables,
//! assignments, comparisons, short-circuit logic and builtin functions, using
//! arbitrary-precision decimals rounded to a configurable context.
//!
//! ```
//! use decalc::evaluate_to_string;
//!
//! assert_eq!(evaluate_to_string("2 + 3 * 4"), "14");
//! assert_eq!(evaluate_to_string("(0.1 + 0.2) == 0.3"), "1");
//! assert_eq!(evaluate_to_string("max(2, sqrt(16), -1)"), "4");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum, the tree the parser builds and the
/// evaluator walks. It also renders trees back into formula source.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Keeps identifier tokens so names can be reported as written.
/// - Pretty-prints trees in a form that parses back into an equal tree.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised along the formula
/// pipeline. Each phase has its own enum; a crate-level `Error` wraps them
/// for callers that run the whole pipeline.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and names for context.
/// - Implements `std::error::Error` and `Display` for reporting.
pub mod error;
/// Orchestrates the entire process of formula evaluation.
///
/// This module ties together lexing, parsing, evaluation, arithmetic context
/// and the calculator facade.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides entry points for evaluating formula source.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and name handling.
///
/// # Responsibilities
/// - Convert between `f64` and decimals without silent garbage.
/// - Provide the case-insensitive map used for variables and functions.
pub mod util;

pub use crate::{
    ast::Expr,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        calculator::Calculator,
        evaluator::{
            core::{EvalResult, Evaluator},
            function::core::Function,
        },
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse,
        value::context::MathContext,
    },
};

/// Evaluates a formula with a fresh [`Calculator`] and renders the outcome.
///
/// The result is the normalized decimal text of the value on success, or the
/// error's message on failure. Nothing carries over between calls; use a
/// [`Calculator`] to keep variables.
///
/// # Examples
/// ```
/// use decalc::evaluate_to_string;
///
/// assert_eq!(evaluate_to_string("round(pi * 2, 4)"), "6.2832");
/// assert_eq!(evaluate_to_string("x + 1"), "Undefined variable 'x'.");
/// ```
#[must_use]
pub fn evaluate_to_string(source: &str) -> String {
    Calculator::new().evaluate_to_string(source)
}
