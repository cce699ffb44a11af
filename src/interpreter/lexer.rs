use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Result type produced by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// Every recognised operator, delimiter and literal class of the formula
/// language has one variant. `Eof` is never matched from text; the tokenizer
/// appends it after the last real token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Modulo,
    /// `^`
    #[token("^")]
    Exponent,
    /// `√`
    #[token("√")]
    SquareRoot,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `||`
    #[token("||")]
    LogicalOr,
    /// `&&`
    #[token("&&")]
    LogicalAnd,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Numeric literal tokens, such as `3.14`, `.5`, `2` or `2.1e-10`.
    ///
    /// The pattern is deliberately loose (`1.2.3` matches); the text is
    /// validated when the literal value is parsed.
    #[regex(r"[0-9.]+([eE][+-]?[0-9.]+)*")]
    Number,
    /// Identifier tokens; variable or function names such as `x` or `sum`.
    #[regex(r"[\p{L}_][\p{L}0-9_]*")]
    Identifier,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns the source text of fixed-spelling tokens.
    ///
    /// Numbers and identifiers have no fixed spelling and yield their class
    /// name instead; `Eof` yields an empty string.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Modulo => "%",
            Self::Exponent => "^",
            Self::SquareRoot => "√",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::LogicalOr => "||",
            Self::LogicalAnd => "&&",
            Self::Comma => ",",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Eof => "",
        }
    }

    /// Upper-case diagnostic name of the kind, e.g. `GREATER_EQUAL`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Modulo => "MODULO",
            Self::Exponent => "EXPONENT",
            Self::SquareRoot => "SQUARE_ROOT",
            Self::Assign => "ASSIGN",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::LogicalOr => "LOGICAL_OR",
            Self::LogicalAnd => "LOGICAL_AND",
            Self::Comma => "COMMA",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token: its kind, the exact source text, and for numbers the
/// parsed value.
///
/// Tokens are plain values. Callers may assemble their own token lists (for
/// example to substitute an identifier) and hand them to
/// [`parse`](crate::interpreter::parser::core::parse).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token class.
    pub kind:    TokenKind,
    /// The source text of the token.
    pub lexeme:  String,
    /// The numeric value, present only on `Number` tokens.
    pub literal: Option<f64>,
    /// Byte offset of the lexeme in its source, used in error messages.
    pub offset:  usize,
}

impl Token {
    /// Creates a token at offset zero.
    ///
    /// # Example
    /// ```
    /// use decalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Number, "2.5", Some(2.5));
    /// assert_eq!(token.to_string(), "(NUMBER, 2.5, 2.5)");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<f64>) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               offset: 0 }
    }

    /// Returns the token moved to the given source offset.
    #[must_use]
    pub const fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// The terminating token every tokenized list ends with.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "", None)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal {
            Some(value) => write!(f, "({}, {}, {value})", self.kind, self.lexeme),
            None => write!(f, "({}, {}, None)", self.kind, self.lexeme),
        }
    }
}

/// Converts source text into tokens.
///
/// Scans left to right, skipping spaces, tabs and carriage returns. The
/// returned list always ends with an `Eof` token. Newlines are not
/// whitespace in this language and are rejected like any other unknown
/// character.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for the first character that starts no
///   token (for example a lone `!`, `|` or `&`).
/// - [`LexError::MalformedNumber`] for a numeric run that is not a valid
///   floating point number, such as `1.2.3`.
///
/// # Example
/// ```
/// use decalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("x >= 1e-3").unwrap()
///                                          .into_iter()
///                                          .map(|t| t.kind)
///                                          .collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::GreaterEqual,
///             TokenKind::Number,
///             TokenKind::Eof]);
///
/// assert!(tokenize("1 | 2").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let Ok(kind) = kind else {
            let character = source[span.start..].chars().next().unwrap_or('\u{0}');
            return Err(LexError::UnexpectedCharacter { character,
                                                       position: span.start });
        };

        let lexeme = lexer.slice();
        let literal = if kind == TokenKind::Number {
            Some(parse_number(lexeme, span.start)?)
        } else {
            None
        };

        tokens.push(Token::new(kind, lexeme, literal).at(span.start));
    }

    tokens.push(Token::eof().at(source.len()));
    trace!(count = tokens.len(), "tokenized source");

    Ok(tokens)
}

/// Parses the text of a `Number` token into its floating point value.
fn parse_number(lexeme: &str, position: usize) -> LexResult<f64> {
    lexeme.parse()
          .map_err(|_| LexError::MalformedNumber { lexeme: lexeme.to_string(),
                                                   position })
}

/// Joins the lexemes of a token list back into source text.
///
/// Whitespace is not preserved, so the result is the compact spelling of
/// the formula.
///
/// # Example
/// ```
/// use decalc::interpreter::lexer::{tokenize, tokens_to_source};
///
/// let tokens = tokenize("a1 * x + 2").unwrap();
/// assert_eq!(tokens_to_source(&tokens), "a1*x+2");
/// ```
#[must_use]
pub fn tokens_to_source(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.lexeme.as_str()).collect()
}
