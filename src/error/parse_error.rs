use thiserror::Error;

use crate::interpreter::token::Token;

/// Errors produced by the scanner.
///
/// This is the logos error type: unrecognized input becomes
/// [`LexicalError::UnexpectedCharacter`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
pub enum LexicalError {
    /// A character that starts no token.
    #[default]
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    /// A string literal still open at the end of the input.
    #[error("Unterminated string.")]
    UnterminatedString,
}

impl LexicalError {
    /// Renders the diagnostic message for the offending source `slice`.
    #[must_use]
    pub fn describe(&self, slice: &str) -> String {
        match self {
            Self::UnexpectedCharacter => {
                let character = slice.chars().next().unwrap_or_default();
                format!("Unexpected character: {character}")
            },
            Self::UnterminatedString => self.to_string(),
        }
    }
}

/// A violated grammar expectation.
///
/// Carries the token the parser was looking at when it gave up, so the
/// diagnostic can point at it (or at the end of input).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// The offending token.
    pub token:   Token,
    /// What the parser expected, e.g. `Expect ')' after expression.`.
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self { token:   token.clone(),
               message: message.into(), }
    }
}
