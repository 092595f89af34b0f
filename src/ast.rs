use std::fmt;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative.
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree node representing an arithmetic expression.
///
/// Nodes form a strict tree: every child is exclusively owned by its parent
/// through a `Box` or a `Vec`, and the root is owned by whoever called the
/// parser. A tree lives for one evaluation only.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14`.
    Literal {
        /// The literal value.
        value: f64,
    },
    /// Reference to a constant or user variable by its lower-cased name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Prefix negation, `-expr`.
    UnaryMinus {
        /// The operand expression.
        expr: Box<Self>,
    },
    /// Function call expression, e.g. `sqrt(x)`.
    ///
    /// The parser accepts any name here; unknown names are rejected when the
    /// call is evaluated.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Convenience constructor for a binary node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Convenience constructor for a negation node.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::UnaryMinus { expr: Box::new(expr) }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal { value }
    }
}

impl fmt::Display for Expr {
    /// Prints the tree fully parenthesized, which makes grouping decisions
    /// visible in logs and test failures.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::UnaryMinus { expr } => write!(f, "(-{expr})"),
            Self::FunctionCall { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}
