use thiserror::Error;

/// Represents every way evaluating an expression can fail.
///
/// The first error encountered by any phase short-circuits evaluation and is
/// returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input was empty or contained only whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
    /// The input could not be tokenized or does not follow the grammar, or a
    /// function was called with the wrong number of arguments.
    #[error("Malformed syntax: {details}.")]
    MalformedSyntax {
        /// What was wrong, and where if the problem has a position.
        details: String,
    },
    /// A closing parenthesis is missing or has no opening partner.
    #[error("Parenthesis mismatch at position {position}.")]
    ParenMismatch {
        /// Byte offset into the input where the problem was detected.
        position: usize,
    },
    /// A variable or function name is not known.
    #[error("Undefined symbol '{name}'.")]
    UndefinedSymbol {
        /// The unresolved name.
        name: String,
    },
    /// Division by zero, or an operation produced an infinite or NaN value.
    #[error("Division by zero or non-finite result.")]
    DivisionByZeroOrOverflow,
}

/// The class of an [`EvalError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    /// See [`EvalError::EmptyExpression`].
    EmptyExpression,
    /// See [`EvalError::MalformedSyntax`].
    MalformedSyntax,
    /// See [`EvalError::ParenMismatch`].
    ParenMismatch,
    /// See [`EvalError::UndefinedSymbol`].
    UndefinedSymbol,
    /// See [`EvalError::DivisionByZeroOrOverflow`].
    DivisionByZeroOrOverflow,
}

impl EvalError {
    /// Builds a [`EvalError::MalformedSyntax`] located at a byte offset.
    pub fn malformed(details: impl std::fmt::Display, position: usize) -> Self {
        Self::MalformedSyntax { details: format!("{details} at position {position}") }
    }

    /// Returns the class of this error.
    ///
    /// # Example
    /// ```
    /// use infix::error::{EvalError, EvalErrorKind};
    ///
    /// let err = EvalError::ParenMismatch { position: 4 };
    /// assert_eq!(err.kind(), EvalErrorKind::ParenMismatch);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> EvalErrorKind {
        match self {
            Self::EmptyExpression => EvalErrorKind::EmptyExpression,
            Self::MalformedSyntax { .. } => EvalErrorKind::MalformedSyntax,
            Self::ParenMismatch { .. } => EvalErrorKind::ParenMismatch,
            Self::UndefinedSymbol { .. } => EvalErrorKind::UndefinedSymbol,
            Self::DivisionByZeroOrOverflow => EvalErrorKind::DivisionByZeroOrOverflow,
        }
    }
}

impl std::str::FromStr for EvalErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EmptyExpression" => Ok(Self::EmptyExpression),
            "MalformedSyntax" => Ok(Self::MalformedSyntax),
            "ParenMismatch" => Ok(Self::ParenMismatch),
            "UndefinedSymbol" => Ok(Self::UndefinedSymbol),
            "DivisionByZeroOrOverflow" => Ok(Self::DivisionByZeroOrOverflow),
            other => Err(format!("unknown error kind '{other}'")),
        }
    }
}
