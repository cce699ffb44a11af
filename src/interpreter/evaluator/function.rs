/// Built-in function implementations.
///
/// `abs`, `sum`, and the rounding family `floor`, `ceil` and `round`.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Returns the smallest or largest value from a list of arguments.
pub mod min_max;
/// The `sqrt` (square root) function implementation.
///
/// Also provides the square root shared with the `√` prefix operator.
pub mod sqrt;
/// The callable interface, the builtin table and call dispatch.
pub mod core;
