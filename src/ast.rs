use std::rc::Rc;

use crate::interpreter::token::{Literal, Token};

/// Renders syntax trees as parenthesized prefix text.
///
/// Used by the `--ast` command-line mode and by tests that check the shape
/// of parsed programs.
pub mod printer;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: `nil`, booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` keyword.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A number literal.
    Number(f64),
    /// A string literal, without quotes.
    String(Rc<str>),
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<&Literal> for LiteralValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(*n),
            Literal::String(s) => s.as_str().into(),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node exclusively owns its children. Nodes that can fail at runtime
/// keep the token they came from, so faults can be reported at the right
/// position.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operator token.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// An infix operation (`a + b`, `a < b`, ...).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment to an existing variable (`name = value`).
    Assign {
        /// The identifier token of the target.
        name:  Token,
        /// The value being assigned.
        value: Box<Self>,
    },
}

/// Represents a statement.
///
/// A program is an ordered sequence of statements. `Block` is the only
/// statement that introduces a new lexical scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print <expr>;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
    },
    /// A variable declaration using `var`.
    VariableDeclaration {
        /// The identifier token.
        name:        Token,
        /// The initializer; the variable is `nil` without one.
        initializer: Option<Expr>,
    },
    /// `{ ... }`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
