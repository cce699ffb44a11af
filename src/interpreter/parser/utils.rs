use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token if its kind is one of `kinds`.
///
/// Returns the matched kind, or `None` (consuming nothing) when the next
/// token does not match or the stream is exhausted.
pub(in crate::interpreter::parser) fn match_kind<'a, I>(tokens: &mut Peekable<I>,
                                                        kinds: &[TokenKind])
                                                        -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| kinds.contains(&token.kind))
          .map(|token| token.kind)
}

/// Describes a token for an error message.
///
/// `Eof` has an empty lexeme, so it is spelled out instead.
pub(in crate::interpreter::parser) fn describe(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "end of input".to_string()
    } else {
        token.lexeme.clone()
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Used for function argument lists. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the `closing` token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - a token other than `,` or `closing` follows an item,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
    closing: TokenKind)
    -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if match_kind(tokens, &[closing]).is_some() {
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Comma, .. }) => {},
            Some(token) if token.kind == closing => break,
            Some(token) => {
                return Err(ParseError::ExpectedClosingParen { found:    describe(token),
                                                              position: token.offset, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok(items)
}
