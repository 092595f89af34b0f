use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, ParseState, missing_end_of_input, parse_expression},
            utils::{expect_closing_paren, parse_arguments},
        },
    },
};

/// Parses a unary expression.
///
/// Negation is right-associative, so `--x` is parsed as `-(-x)`. It binds
/// looser than exponentiation on its right, which makes `-2^2` mean
/// `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
///
/// Every recursive path of the grammar passes through here, so this is
/// where nesting is counted.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let position = tokens.peek().map_or(0, |(_, position)| *position);
    state.descend(position)?;

    let expr = if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        Expr::negate(parse_unary(tokens, state)?)
    } else {
        parse_power(tokens, state)?
    };

    state.ascend();
    Ok(expr)
}

/// Parses exponentiation with right-associativity.
///
/// `a ^ b ^ c` parses as `a ^ (b ^ c)`. The exponent is a full unary
/// expression, so `2^-1` is accepted.
///
/// Grammar: `power := primary ("^" unary)?`
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let base = parse_primary(tokens, state)?;
    if let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, state)?;
        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent));
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier ( "(" arguments )?
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - [`EvalError::ParenMismatch`] when input ends while a `(` is open, or
///   for a `)` that closes nothing.
/// - [`EvalError::MalformedSyntax`] when the next token cannot start an
///   operand, e.g. two operators in a row, an empty `()` group or a dangling
///   operator.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::Literal { value: *value }),
        Some((Token::Identifier(name), _)) => parse_identifier_or_function(tokens, state, name),
        Some((Token::LParen, _)) => {
            state.open_paren();
            let inner = parse_expression(tokens, state)?;
            expect_closing_paren(tokens)?;
            state.close_paren();
            Ok(inner)
        },
        Some((Token::EndOfInput, position)) if state.inside_parens() => {
            Err(EvalError::ParenMismatch { position: *position })
        },
        Some((Token::EndOfInput, position)) => {
            Err(EvalError::malformed("unexpected end of input", *position))
        },
        Some((Token::RParen, position)) if !state.inside_parens() => {
            Err(EvalError::ParenMismatch { position: *position })
        },
        Some((tok, position)) => {
            Err(EvalError::malformed(format!("expected a number, name or '(', found {tok:?}"),
                                     *position))
        },
        None => Err(missing_end_of_input()),
    }
}

/// Parses what follows an identifier: a call if the next token is `(`,
/// otherwise a plain variable reference.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       state: &mut ParseState,
                                       name: &str)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        state.open_paren();
        let arguments = parse_arguments(tokens, state)?;
        state.close_paren();
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments });
    }
    Ok(Expr::Variable { name: name.to_string() })
}
