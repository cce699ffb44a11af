use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::{parse_call, parse_unary},
            utils::match_kind,
        },
    },
};

/// Operators of the equality level.
pub const EQUALITY_OPERATORS: &[TokenKind] = &[TokenKind::Equal, TokenKind::NotEqual];
/// Operators of the comparison level.
pub const COMPARISON_OPERATORS: &[TokenKind] = &[TokenKind::Greater,
                                                 TokenKind::GreaterEqual,
                                                 TokenKind::Less,
                                                 TokenKind::LessEqual];
/// Operators of the additive level.
pub const ADDITIVE_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
/// Operators of the multiplicative level.
pub const MULTIPLICATIVE_OPERATORS: &[TokenKind] =
    &[TokenKind::Star, TokenKind::Slash, TokenKind::Modulo];

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. Precedence is the lowest of all
/// operators below assignment.
///
/// Grammar: `or := and ("||" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_logical_and(tokens)?;

    while let Some(operator) = match_kind(tokens, &[TokenKind::LogicalOr]) {
        let right = parse_logical_and(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               operator,
                               right: Box::new(right) };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Binds tighter than `||`.
///
/// Grammar: `and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_equality(tokens)?;

    while let Some(operator) = match_kind(tokens, &[TokenKind::LogicalAnd]) {
        let right = parse_equality(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               operator,
                               right: Box::new(right) };
    }

    Ok(left)
}

/// Parses `==` and `!=`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, EQUALITY_OPERATORS, parse_comparison)
}

/// Parses the ordering comparisons `>`, `>=`, `<` and `<=`.
///
/// Chains are left-associative, so `1 < 2 < 3` compares the `0`/`1` result
/// of `1 < 2` with `3`.
///
/// Grammar: `comparison := additive ((">" | ">=" | "<" | "<=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, COMPARISON_OPERATORS, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, ADDITIVE_OPERATORS, parse_multiplicative)
}

/// Parses multiplication-level expressions: `*`, `/` and `%`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, MULTIPLICATIVE_OPERATORS, parse_unary)
}

/// Parses exponentiation.
///
/// The base is a call or primary. The exponent re-enters the unary level,
/// which makes `^` right-associative (`2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`) and
/// allows signed exponents such as `2 ^ -1`. Negation binds looser than
/// `^`, so `-2 ^ 2` is `-(2 ^ 2)`.
///
/// Grammar: `exponent := call ("^" unary)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_call(tokens)?;

    if let Some(operator) = match_kind(tokens, &[TokenKind::Exponent]) {
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::Binary { left: Box::new(base),
                                 operator,
                                 right: Box::new(exponent) });
    }

    Ok(base)
}

/// Parses one left-associative binary precedence level.
///
/// Reads an operand with `parse_operand`, then folds every following
/// `operator operand` pair in `operators` into a left-leaning
/// [`Expr::Binary`] chain.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[TokenKind],
                                 parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_operand(tokens)?;

    while let Some(operator) = match_kind(tokens, operators) {
        let right = parse_operand(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              operator,
                              right: Box::new(right) };
    }

    Ok(left)
}
