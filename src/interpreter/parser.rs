/// Parser entry points.
///
/// Holds the public [`parse`](core::parse) function, which checks that a
/// token list forms exactly one expression, and the lowest-precedence rules
/// (expression and assignment).
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// exponentiation. All levels are left-associative except exponentiation,
/// whose right operand re-enters the unary level.
pub mod binary;

/// Prefix operators and atoms.
///
/// Parses negation, the square-root prefix, function calls, literals,
/// variables and parenthesized groups.
pub mod unary;

/// Shared helpers for the parsing functions.
///
/// Token matching, comma-separated argument lists and error construction.
pub mod utils;
