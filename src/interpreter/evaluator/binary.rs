/// Arithmetic operators and binary dispatch.
pub mod core;
/// Comparison operators, producing `1` or `0`.
pub mod comparison;
/// Short-circuit `||` and `&&`.
pub mod logic;
/// Exponentiation with integer and fractional exponents.
pub mod power;
