use thiserror::Error;

/// Lexing errors.
///
/// Raised by the tokenizer when the source contains a character that starts
/// no token, or a numeric run that is not a valid number. Lexing stops at the
/// first error.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression tree
/// from tokens: a missing operand, an unclosed parenthesis, an invalid
/// assignment target, or tokens left over after a complete expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking an expression
/// tree: unbound names, wrong argument counts, division by zero and values
/// outside a function's domain.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure along the tokenize, parse, evaluate pipeline.
///
/// The phase errors convert into this type with `?`, so facade code can run
/// the whole pipeline in one function and still hand structured errors back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
