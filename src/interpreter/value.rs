/// Precision and rounding configuration.
///
/// Defines the `MathContext` carried by every evaluator. All arithmetic
/// results are rounded to its number of significant digits with its rounding
/// mode, so changing it affects every evaluation performed afterwards and
/// none performed before.
pub mod context;
/// Text rendering of decimal results.
///
/// Results are normalized (trailing zeros removed) and written in plain
/// positional notation before being shown to users.
pub mod format;
