use std::fmt;

use crate::interpreter::lexer::{Token, TokenKind};

/// An abstract syntax tree (AST) node representing a formula.
///
/// `Expr` is a closed set of variants; every consumer (the evaluator, the
/// pretty-printer) matches on it exhaustively. Each node owns its children,
/// and names are kept as written: they are resolved, case-insensitively, only
/// when the tree is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Assignment to a variable, e.g. `x = 5`. Evaluates to the stored value.
    Assign {
        /// The identifier token of the target variable.
        name:  Token,
        /// The expression whose value is stored.
        value: Box<Self>,
    },
    /// A short-circuiting logical operation (`||` or `&&`).
    Logical {
        /// Left operand, always evaluated.
        left:     Box<Self>,
        /// The operator kind.
        operator: TokenKind,
        /// Right operand, evaluated only when needed.
        right:    Box<Self>,
    },
    /// A binary arithmetic or comparison operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator kind.
        operator: TokenKind,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A prefix operation: negation or square root.
    Unary {
        /// The operator kind.
        operator: TokenKind,
        /// The operand.
        right:    Box<Self>,
    },
    /// Function call expression (e.g. `max(a, 2)`).
    Call {
        /// Name of the function being called, as written.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// A numeric literal.
    Literal {
        /// The value read by the tokenizer.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression inside the parentheses.
        inner: Box<Self>,
    },
}

impl Expr {
    /// Returns `true` when the root of the tree is a comparison or a logical
    /// operation, i.e. the formula states a condition rather than a quantity.
    ///
    /// # Example
    /// ```
    /// use decalc::interpreter::{lexer::tokenize, parser::core::parse};
    ///
    /// let constraint = parse(&tokenize("x >= 0 && x < 10").unwrap()).unwrap();
    /// let formula = parse(&tokenize("2 * x + 1").unwrap()).unwrap();
    ///
    /// assert!(constraint.is_constraint());
    /// assert!(!formula.is_constraint());
    /// ```
    #[must_use]
    pub const fn is_constraint(&self) -> bool {
        match self {
            Self::Logical { .. } => true,
            Self::Binary { operator, .. } => matches!(operator,
                                                      TokenKind::Equal
                                                      | TokenKind::NotEqual
                                                      | TokenKind::Greater
                                                      | TokenKind::GreaterEqual
                                                      | TokenKind::Less
                                                      | TokenKind::LessEqual),
            _ => false,
        }
    }
}

/// Renders the tree back into formula source.
///
/// Binary operators are surrounded by single spaces, groupings keep their
/// parentheses, and literals use the shortest text that reads back as the
/// same number, so the output parses into an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { name, value } => write!(f, "{} = {value}", name.lexeme),
            Self::Logical { left,
                            operator,
                            right, }
            | Self::Binary { left,
                             operator,
                             right, } => write!(f, "{left} {} {right}", operator.symbol()),
            Self::Unary { operator, right } => write!(f, "{}{right}", operator.symbol()),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => f.write_str(&name.lexeme),
            Self::Grouping { inner } => write!(f, "({inner})"),
        }
    }
}
