use thiserror::Error;

/// Represents all errors that can occur during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token, such as a lone `!` or a newline.
    #[error("Invalid token {character:?} at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A run of digits, dots and exponent markers that is not a number.
    #[error("Malformed number '{lexeme}' at position {position}.")]
    MalformedNumber {
        /// The text that failed to parse.
        lexeme:   String,
        /// Byte offset of the text in the source.
        position: usize,
    },
}
