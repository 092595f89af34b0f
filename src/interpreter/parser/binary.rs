use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, ParseState},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `state`: Parenthesis and depth bookkeeping of the current parse.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_multiplicative(tokens, state)?;
    let mut operators = 0;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        state.chain(*position)?;
        operators += 1;
        tokens.next();
        let right = parse_multiplicative(tokens, state)?;
        left = Expr::binary(left, op, right);
    }
    state.unchain(operators);
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are unary
/// expressions, so `2*-3` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   state: &mut ParseState)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_unary(tokens, state)?;
    let mut operators = 0;
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        state.chain(*position)?;
        operators += 1;
        tokens.next();
        let right = parse_unary(tokens, state)?;
        left = Expr::binary(left, op, right);
    }
    state.unchain(operators);
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of `+ - * / ^`.
///
/// # Example
/// ```
/// use infix::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
