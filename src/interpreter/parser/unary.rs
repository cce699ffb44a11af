use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
            utils::{describe, match_kind, parse_comma_separated},
        },
    },
};

/// Parses a unary negation.
///
/// Negation is right-associative, so `--x` is `-(-x)`. Without a leading
/// `-` the function delegates to the square-root level.
///
/// Grammar: `unary := "-" unary | sqrt`
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(operator) = match_kind(tokens, &[TokenKind::Minus]) {
        let right = parse_unary(tokens)?;
        return Ok(Expr::Unary { operator,
                                right: Box::new(right) });
    }

    parse_sqrt(tokens)
}

/// Parses the square-root prefix `√`.
///
/// The operand is a full unary expression, so `√-4` parses (and fails at
/// evaluation time) and `√x ^ 2` is `√(x ^ 2)`.
///
/// Grammar: `sqrt := "√" unary | exponent`
pub(crate) fn parse_sqrt<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(operator) = match_kind(tokens, &[TokenKind::SquareRoot]) {
        let right = parse_unary(tokens)?;
        return Ok(Expr::Unary { operator,
                                right: Box::new(right) });
    }

    parse_exponent(tokens)
}

/// Parses a function call, or falls through to a primary expression.
///
/// A call needs two tokens of lookahead: an identifier immediately followed
/// by `(`. The check runs on a copy of the cursor; only when both tokens
/// match is the copy committed, otherwise the original position is kept and
/// the identifier is parsed as a plain variable.
///
/// Grammar: `call := IDENTIFIER "(" (expression ("," expression)*)? ")" |
/// primary`
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or the argument list
/// is not closed by `)`.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut cursor = tokens.clone();

    if let Some(name) = cursor.next_if(|token| token.kind == TokenKind::Identifier)
       && cursor.next_if(|token| token.kind == TokenKind::LeftParen)
                .is_some()
    {
        *tokens = cursor;
        let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RightParen)?;
        return Ok(Expr::Call { name: name.lexeme.clone(),
                               arguments });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are numeric literals, variable references and
/// parenthesized expressions.
///
/// Grammar: `primary := NUMBER | IDENTIFIER | "(" expression ")"`
///
/// # Errors
/// Returns [`ParseError::ExpectedExpression`] for any other token (including
/// `Eof`, e.g. for `1 +`) and [`ParseError::UnexpectedEndOfInput`] when the
/// stream is exhausted.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.peek()
                      .copied()
                      .ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            let value = token.literal
                             .or_else(|| token.lexeme.parse().ok())
                             .ok_or_else(|| expected_expression(token))?;
            Ok(Expr::Literal { value })
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable { name: token.clone() })
        },
        TokenKind::LeftParen => parse_grouping(tokens),
        _ => Err(expected_expression(token)),
    }
}

/// Parses a parenthesized expression.
///
/// The group is kept in the tree as [`Expr::Grouping`] so that the
/// pretty-printer can reproduce the parentheses.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some(Token { kind: TokenKind::RightParen, .. }) => {
            Ok(Expr::Grouping { inner: Box::new(inner) })
        },
        Some(token) => Err(ParseError::ExpectedClosingParen { found:    describe(token),
                                                              position: token.offset, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

fn expected_expression(token: &Token) -> ParseError {
    ParseError::ExpectedExpression { found:    describe(token),
                                     position: token.offset, }
}
