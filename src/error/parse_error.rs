use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing tokens.
pub enum ParseError {
    /// A token that cannot start an operand was found where one was required.
    #[error("Expected expression at position {position}, found '{found}'.")]
    ExpectedExpression {
        /// Lexeme of the token encountered.
        found:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// The token list ended before the expression was complete.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected ')' at position {position}, found '{found}'.")]
    ExpectedClosingParen {
        /// Lexeme of the token encountered instead.
        found:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// The left-hand side of `=` is not a plain variable.
    #[error("Invalid assignment target '{target}'.")]
    InvalidAssignmentTarget {
        /// Source form of the rejected left-hand side.
        target: String,
    },
    /// Found extra tokens after a complete expression.
    #[error("Expected end of expression at position {position}, found '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
}
