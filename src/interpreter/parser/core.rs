use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// How many groups, calls, signs and exponents may nest inside each other.
pub const MAX_NESTING: usize = 256;

/// Upper bound on the height of a parsed tree. Every nesting level and every
/// chained `+ - * /` operator counts as one.
pub const MAX_DEPTH: usize = 1024;

/// Bookkeeping shared by all parsing functions of one `parse` call.
///
/// Tracks unclosed parentheses, so running out of input inside a group is
/// reported as [`EvalError::ParenMismatch`], and bounds recursion, so hostile
/// input fails with [`EvalError::MalformedSyntax`] instead of exhausting the
/// stack in the parser, the evaluator or when the tree is dropped.
#[derive(Debug, Default)]
pub struct ParseState {
    open_parens: usize,
    nesting:     usize,
    depth:       usize,
}

impl ParseState {
    /// Enters one level of recursion.
    pub(in crate::interpreter::parser) fn descend(&mut self, position: usize) -> ParseResult<()> {
        self.nesting += 1;
        self.depth += 1;
        if self.nesting > MAX_NESTING || self.depth > MAX_DEPTH {
            return Err(too_deep(position));
        }
        Ok(())
    }

    pub(in crate::interpreter::parser) const fn ascend(&mut self) {
        self.nesting -= 1;
        self.depth -= 1;
    }

    /// Accounts for one more operator in a left-associative chain.
    pub(in crate::interpreter::parser) fn chain(&mut self, position: usize) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(too_deep(position));
        }
        Ok(())
    }

    /// Releases the operators of a finished chain.
    pub(in crate::interpreter::parser) const fn unchain(&mut self, operators: usize) {
        self.depth -= operators;
    }

    pub(in crate::interpreter::parser) const fn open_paren(&mut self) {
        self.open_parens += 1;
    }

    pub(in crate::interpreter::parser) const fn close_paren(&mut self) {
        self.open_parens -= 1;
    }

    /// Reports whether some `(` is still waiting for its `)`.
    pub(in crate::interpreter::parser) const fn inside_parens(&self) -> bool {
        self.open_parens > 0
    }
}

/// Parses a full token sequence into a single expression tree.
///
/// The sequence must end with [`Token::EndOfInput`]. Every token is consumed
/// exactly once; anything left over after a complete expression is an error.
///
/// # Errors
/// - [`EvalError::ParenMismatch`] when input ends inside a group or a call,
///   or for a `)` without a matching `(`.
/// - [`EvalError::MalformedSyntax`] for every other grammar violation,
///   including nesting deeper than [`MAX_NESTING`].
///
/// # Example
/// ```
/// use infix::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens: Vec<_> = tokenize("2^3^2").collect::<Result<_, _>>().unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let mut state = ParseState::default();
    let expr = parse_expression(&mut iter, &mut state)?;

    match iter.next() {
        Some((Token::EndOfInput, _)) => {
            trace!(%expr, "parsed expression");
            Ok(expr)
        },
        Some((Token::RParen, position)) => Err(EvalError::ParenMismatch { position: *position }),
        Some((tok, position)) => {
            Err(EvalError::malformed(format!("unexpected {tok:?} after a complete expression"),
                                     *position))
        },
        None => Err(missing_end_of_input()),
    }
}

/// Parses a full expression.
///
/// This is the recursive entry point used for the top level, parenthesized
/// groups and call arguments. It begins at the lowest-precedence level.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens, state)
}

/// The error for a token slice that was not produced by
/// [`crate::interpreter::lexer::tokenize`].
pub(in crate::interpreter::parser) fn missing_end_of_input() -> EvalError {
    EvalError::MalformedSyntax { details: "token stream ended without an end-of-input marker".to_string() }
}

fn too_deep(position: usize) -> EvalError {
    EvalError::malformed("expression is nested too deeply", position)
}
