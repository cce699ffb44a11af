/// The evaluator module walks expression trees and computes results.
///
/// The evaluator holds variable bindings, the function registry and the
/// arithmetic context, and reduces an `Expr` to a single decimal value.
///
/// # Responsibilities
/// - Evaluates every node kind, rounding arithmetic results to the context.
/// - Resolves variables and functions case-insensitively.
/// - Reports evaluation errors such as division by zero or unbound names.
pub mod evaluator;
/// The lexer module tokenizes formula source.
///
/// The lexer (tokenizer) reads the raw source text and produces a list of
/// tokens: numbers, identifiers, operators and delimiters, terminated by an
/// end-of-input token. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, text and source offset.
/// - Parses numeric literals.
/// - Reports lexical errors for unknown characters or malformed numbers.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one function per precedence level. A
/// token list must form exactly one expression.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Enforces precedence and associativity.
/// - Reports syntax errors with the offending token and position.
pub mod parser;
/// The value module defines how decimal results are computed and shown.
///
/// # Responsibilities
/// - Defines the `MathContext` (precision and rounding mode).
/// - Renders results in normalized plain notation.
pub mod value;
/// The calculator facade.
///
/// Ties tokenizer, parser and evaluator together behind a single object that
/// evaluates formula source and renders results or errors as text.
pub mod calculator;
