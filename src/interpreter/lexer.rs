use logos::Logos;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// A token paired with the byte offset where it starts in the source.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; constant, variable or function names such as `pi`.
    /// The name is lower-cased, so `PI` and `pi` are the same token.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_ascii_lowercase())]
    Identifier(String),
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
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Marks the end of the token stream. Never produced by the lexer itself;
    /// [`tokenize`] appends exactly one.
    EndOfInput,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// Literals too large for an `f64` come back as infinity; the evaluator
/// rejects them later.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression lazily.
///
/// The returned iterator yields each token with its byte offset, stops being
/// useful after the first error, and always finishes with one
/// [`Token::EndOfInput`]. It cannot be restarted; tokenize again instead.
///
/// # Errors
/// Yields [`EvalError::MalformedSyntax`] for any character that does not start
/// a token.
///
/// # Example
/// ```
/// use infix::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("2*PI").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Star, 1),
///                 (Token::Identifier("pi".to_string()), 2),
///                 (Token::EndOfInput, 4)]);
/// ```
pub fn tokenize(source: &str) -> impl Iterator<Item = EvalResult<Spanned>> + '_ {
    Token::lexer(source).spanned()
                        .map(move |(result, span)| match result {
                            Ok(token) => Ok((token, span.start)),
                            Err(()) => {
                                let found = &source[span.clone()];
                                Err(EvalError::malformed(format!("unrecognized input '{found}'"),
                                                         span.start))
                            },
                        })
                        .chain(std::iter::once(Ok((Token::EndOfInput, source.len()))))
}

/// Reports whether `name` lexes as exactly one identifier token.
///
/// This is the rule user variable names must satisfy, so that every defined
/// variable can be referenced from an expression.
///
/// # Example
/// ```
/// use infix::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("rate_2"));
/// assert!(!is_identifier("2x"));
/// assert!(!is_identifier("1e5"));
/// assert!(!is_identifier("a b"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut lexer = Token::lexer(name);
    matches!(lexer.next(), Some(Ok(Token::Identifier(_))))
    && lexer.span() == (0..name.len())
    && lexer.next().is_none()
}
