use tracing::{debug, instrument};

use crate::{
    ast::{Expr, Statement},
    diagnostics::Diagnostics,
    error::ParseError,
    interpreter::token::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a scanned token sequence.
///
/// The parser reads one token of lookahead. Grammar violations are raised as
/// [`ParseError`] values and turned into diagnostics at the declaration
/// boundary, after which the parser skips ahead to the next statement.
pub struct Parser<'t, 'd> {
    tokens:      &'t [Token],
    current:     usize,
    diagnostics: &'d mut Diagnostics,
}

/// Parses a token sequence into a program.
///
/// Always returns a (possibly empty) statement sequence. Declarations that
/// fail to parse are reported to `diagnostics` and left out, and parsing
/// resumes at the next statement boundary, so one call surfaces every syntax
/// error in the input. A token sequence that does not end with the
/// end-of-input token is treated as if it did.
///
/// Grammar:
/// ```text
///     program     := declaration* EOF
///     declaration := "var" IDENTIFIER ( "=" expression )? ";"
///                  | statement
///     statement   := "print" expression ";"
///                  | "{" declaration* "}"
///                  | expression ";"
/// ```
///
/// # Example
/// ```
/// use treelox::{
///     diagnostics::Diagnostics,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("var a = 1; print a;", &mut diagnostics);
/// let program = parse(&tokens, &mut diagnostics);
///
/// assert_eq!(program.len(), 2);
/// assert!(!diagnostics.had_error());
/// ```
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> Vec<Statement> {
    let terminated;
    let tokens = if tokens.last().is_some_and(Token::is_eof) {
        tokens
    } else {
        terminated = with_end_of_input(tokens);
        terminated.as_slice()
    };

    let mut statements = Vec::new();
    let mut parser = Parser::new(tokens, diagnostics);
    while !parser.is_at_end() {
        if let Some(statement) = parser.declaration() {
            statements.push(statement);
        }
    }

    debug!(count = statements.len(), "parsed statements");
    statements
}

/// Copies `tokens` and appends an end-of-input token just past the last one.
fn with_end_of_input(tokens: &[Token]) -> Vec<Token> {
    let eof = tokens.last().map_or_else(|| Token::eof(1, 1), |last| {
                                          Token::eof(last.line,
                                                     last.column + last.lexeme.chars().count())
                                      });

    tokens.iter().cloned().chain(std::iter::once(eof)).collect()
}

impl<'t, 'd> Parser<'t, 'd> {
    /// Creates a parser over `tokens`, which must be non-empty and end with
    /// the end-of-input token.
    fn new(tokens: &'t [Token], diagnostics: &'d mut Diagnostics) -> Self {
        Self { tokens,
               current: 0,
               diagnostics }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence ladder:
    ///
    /// ```text
    ///     expression := assignment
    ///     assignment := IDENTIFIER "=" assignment | equality
    /// ```
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// Parses a right-associative assignment.
    ///
    /// The left-hand side is parsed as an ordinary expression first; only a
    /// bare variable reference is a valid target. Any other target is
    /// reported without aborting, and the left-hand expression is returned so
    /// that parsing can carry on.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.equality()?;

        if let Some(equals) = self.match_kind(&[TokenKind::Equal]) {
            let value = self.assignment()?;

            return match expr {
                Expr::Variable { name } => Ok(Expr::Assign { name,
                                                             value: Box::new(value) }),
                other => {
                    self.report(&ParseError::new(equals, "Invalid assignment target."));
                    Ok(other)
                },
            };
        }

        Ok(expr)
    }

    /// The current, not yet consumed token.
    pub(in crate::interpreter::parser) fn peek(&self) -> &'t Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.current.min(last)]
    }

    fn previous(&self) -> &'t Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token and returns it. At the end of input nothing
    /// is consumed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'t Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Consumes the current token if it is one of `kinds`.
    pub(in crate::interpreter::parser) fn match_kind(&mut self,
                                                     kinds: &[TokenKind])
                                                     -> Option<&'t Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of the expected `kind` or fails with `message`,
    /// attributed to the token found instead.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &str)
                                                  -> ParseResult<&'t Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(self.peek(), message))
        }
    }

    pub(in crate::interpreter::parser) fn report(&mut self, error: &ParseError) {
        self.diagnostics.token_error(&error.token, error.message.as_str());
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops right after a `;`, or before a keyword that starts a
    /// declaration or statement. The token that caused the error is always
    /// skipped, so recovery makes progress.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement() {
                return;
            }
            self.advance();
        }
    }
}
