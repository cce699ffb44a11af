use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to read a variable that was never bound.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name as written in the source.
        name: String,
    },
    /// Called a function that was never registered.
    #[error("Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name as written in the source.
        name: String,
    },
    /// A function received a number of arguments it does not accept.
    #[error("{name} requires {expected}, found {found}.")]
    ArityMismatch {
        /// The function name.
        name:     String,
        /// Human readable description of the accepted argument counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operator appeared in a node kind that cannot apply it.
    #[error("Invalid {node} operator '{operator}'.")]
    InvalidOperator {
        /// Symbol of the operator.
        operator: String,
        /// The node kind, e.g. `binary`.
        node:     &'static str,
    },
    /// Division or remainder with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A value outside the mathematical domain of an operation.
    #[error("Math domain error in {operation}: {details}.")]
    Domain {
        /// The operation that rejected its input.
        operation: &'static str,
        /// What was wrong with the input.
        details:   String,
    },
    /// A function argument had a valid type but an unusable value.
    #[error("Invalid argument to {name}: {details}.")]
    InvalidArgument {
        /// The function name.
        name:    &'static str,
        /// What was wrong with the argument.
        details: String,
    },
    /// An intermediate result cannot be represented.
    #[error("Overflow while computing {operation}.")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
}
