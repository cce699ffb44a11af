/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, short-circuit logic and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and the prefix square root.
pub mod unary;

/// Core evaluation logic and state.
///
/// Contains the evaluator itself: the variable table, the function registry,
/// the arithmetic context and the dispatch over expression nodes.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides truthiness and argument count checks shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Defines the callable interface, the builtin function table and call
/// dispatch.
pub mod function;
