use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_logical_or, utils::match_kind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token list into a single expression.
///
/// The list is expected to end with an `Eof` token, as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). A list that simply runs
/// out is treated the same way, so hand-built token lists need not carry the
/// terminator.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form an expression or if any
/// token other than `Eof` remains after it.
///
/// # Example
/// ```
/// use decalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let expr = parse(&tokenize("x = (1 + 2) * 3").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "x = (1 + 2) * 3");
///
/// assert!(parse(&tokenize("1 +").unwrap()).is_err());
/// assert!(parse(&tokenize("1 2").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.peek() {
        None | Some(Token { kind: TokenKind::Eof, .. }) => {
            trace!(tokens = tokens.len(), "parsed expression");
            Ok(expr)
        },
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token:    token.lexeme.clone(),
                                                                  position: token.offset, }),
    }
}

/// Parses a full expression.
///
/// This is the recursive entry point used for the whole formula, for every
/// call argument and for parenthesized groups. It begins at the
/// lowest-precedence level, assignment.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment.
///
/// Assignment is right-associative, so `a = b = 2` stores `2` in `b` and then
/// in `a`. The left-hand side is parsed as an ordinary expression first and
/// only afterwards checked to be a bare variable.
///
/// Grammar: `assignment := or ("=" assignment)?`
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] when the left-hand side
/// of `=` is anything but a variable, e.g. `(x) = 1` or `2 = x`.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_logical_or(tokens)?;

    if match_kind(tokens, &[TokenKind::Assign]).is_none() {
        return Ok(target);
    }

    let value = parse_assignment(tokens)?;
    match target {
        Expr::Variable { name } => Ok(Expr::Assign { name,
                                                     value: Box::new(value) }),
        other => Err(ParseError::InvalidAssignmentTarget { target: other.to_string() }),
    }
}
