use thiserror::Error;

use crate::interpreter::token::Token;

/// Represents all errors that can occur during evaluation.
///
/// Every variant except [`RuntimeError::Output`] carries the token that
/// caused it: the operator for type faults, the variable name for scoping
/// faults.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A unary operator needed a number.
    #[error("Operand must be a number.")]
    OperandMustBeNumber {
        /// The operator token.
        operator: Token,
    },
    /// A binary arithmetic or comparison operator needed two numbers.
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The operator token.
        operator: Token,
    },
    /// `+` was applied to something other than numbers and strings.
    #[error("Operands must be numbers or strings.")]
    OperandsMustBeNumbersOrStrings {
        /// The operator token.
        operator: Token,
    },
    /// Tried to read or assign a variable no enclosing scope defines.
    #[error("Undefined variable '{}'.", .name.lexeme)]
    UndefinedVariable {
        /// The variable name token.
        name: Token,
    },
    /// Tried to declare a name twice in the same scope.
    #[error("Variable '{}' is already defined in this scope.", .name.lexeme)]
    AlreadyDefined {
        /// The variable name token.
        name: Token,
    },
    /// Writing program output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// The token the fault is attributed to, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::OperandMustBeNumber { operator }
            | Self::OperandsMustBeNumbers { operator }
            | Self::OperandsMustBeNumbersOrStrings { operator } => Some(operator),
            Self::UndefinedVariable { name } | Self::AlreadyDefined { name } => Some(name),
            Self::Output(_) => None,
        }
    }
}
