use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, ParseState, missing_end_of_input, parse_expression},
    },
};

/// Parses a comma-separated argument list up to and including `)`.
///
/// The opening `(` must already be consumed. An immediately encountered `)`
/// produces an empty list; arity is checked later by the evaluator.
///
/// Grammar: `arguments := (expression ("," expression)*)? ")"`
///
/// # Errors
/// - [`EvalError::ParenMismatch`] if input ends before the closing `)`.
/// - [`EvalError::MalformedSyntax`] for a trailing comma or any other token
///   where `,` or `)` was expected.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             state: &mut ParseState)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens, state)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((Token::EndOfInput, position)) => {
                return Err(EvalError::ParenMismatch { position: *position });
            },
            Some((tok, position)) => {
                return Err(EvalError::malformed(format!("expected ',' or ')', found {tok:?}"),
                                                *position));
            },
            None => return Err(missing_end_of_input()),
        }
    }
    Ok(items)
}

/// Consumes the `)` closing a parenthesized group.
///
/// # Errors
/// - [`EvalError::ParenMismatch`] if input ends first.
/// - [`EvalError::MalformedSyntax`] if another token is found.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((Token::EndOfInput, position)) => Err(EvalError::ParenMismatch { position: *position }),
        Some((tok, position)) => {
            Err(EvalError::malformed(format!("expected ')', found {tok:?}"), *position))
        },
        None => Err(missing_end_of_input()),
    }
}
