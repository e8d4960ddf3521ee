use std::fmt;

use tracing::debug;

use crate::{error::RuntimeError, interpreter::token::Token};

/// Where a syntax error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// No specific token; used for lexical errors.
    Unknown,
    /// At the end-of-input token.
    End,
    /// At a token with the given lexeme.
    Lexeme(String),
}

/// A single reported fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A lexical or syntax error.
    Syntax {
        line:     usize,
        /// `None` when the column is not meaningful (end of input).
        column:   Option<usize>,
        location: Location,
        message:  String,
    },
    /// A runtime fault that halted interpretation.
    Runtime {
        /// `None` for faults with no originating token.
        line:    Option<usize>,
        column:  Option<usize>,
        message: String,
    },
}

impl Diagnostic {
    /// The message text without any position prefix or suffix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Syntax { message, .. } | Self::Runtime { message, .. } => message,
        }
    }

    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { line,
                           column,
                           location,
                           message, } => {
                write!(f, "[line {line}")?;
                if let Some(column) = column {
                    write!(f, ":{column}")?;
                }
                write!(f, "] Error")?;
                match location {
                    Location::Unknown => {},
                    Location::End => write!(f, " at end")?,
                    Location::Lexeme(lexeme) => write!(f, " at '{lexeme}'")?,
                }
                write!(f, ": {message}")
            },
            Self::Runtime { line,
                            column,
                            message, } => {
                write!(f, "{message}")?;
                if let Some(line) = line {
                    write!(f, "\n[line {line}")?;
                    if let Some(column) = column {
                        write!(f, ":{column}")?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            },
        }
    }
}

/// Collects the faults reported while scanning, parsing and interpreting one
/// unit of source.
///
/// The two flags are sticky: once an error of either kind is reported they
/// stay set until [`Diagnostics::clear`] is called. The caller uses them to
/// decide between "ran ok", "syntax error" and "runtime error".
///
/// # Example
/// ```
/// use treelox::diagnostics::Diagnostics;
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.error(3, 7, "Unexpected character: @");
///
/// assert!(diagnostics.had_error());
/// assert!(!diagnostics.had_runtime_error());
/// assert_eq!(diagnostics.iter().next().unwrap().to_string(),
///            "[line 3:7] Error: Unexpected character: @");
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    records:           Vec<Diagnostic>,
    had_error:         bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a lexical or syntax error at an explicit position.
    pub fn error(&mut self, line: usize, column: usize, message: impl Into<String>) {
        self.push_syntax(Diagnostic::Syntax { line,
                                              column: Some(column),
                                              location: Location::Unknown,
                                              message: message.into() });
    }

    /// Reports a syntax error attributed to `token`.
    pub fn token_error(&mut self, token: &Token, message: impl Into<String>) {
        let (column, location) = if token.is_eof() {
            (None, Location::End)
        } else {
            (Some(token.column), Location::Lexeme(token.lexeme.clone()))
        };

        self.push_syntax(Diagnostic::Syntax { line: token.line,
                                              column,
                                              location,
                                              message: message.into() });
    }

    /// Reports a runtime fault, positioned at its originating token.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        let token = error.token();
        let diagnostic = Diagnostic::Runtime { line:    token.map(|t| t.line),
                                               column:  token.map(|t| t.column),
                                               message: error.to_string(), };

        debug!(%diagnostic, "runtime error reported");
        self.records.push(diagnostic);
        self.had_runtime_error = true;
    }

    fn push_syntax(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "syntax error reported");
        self.records.push(diagnostic);
        self.had_error = true;
    }

    /// `true` once any lexical or syntax error was reported.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    /// `true` once a runtime fault was reported.
    #[must_use]
    pub const fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates over the reported faults in the order they were reported.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.records.iter()
    }

    /// Drops all records and resets both flags.
    pub fn clear(&mut self) {
        self.records.clear();
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type IntoIter = std::slice::Iter<'a, Diagnostic>;
    type Item = &'a Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
