use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_, '_> {
    /// Parses a single declaration, recovering from syntax errors.
    ///
    /// A declaration is either a `var` declaration or a statement. When the
    /// declaration is malformed the error is reported, the parser
    /// re-synchronizes to the next statement boundary and `None` is returned,
    /// so the caller simply omits it.
    pub(in crate::interpreter::parser) fn declaration(&mut self) -> Option<Statement> {
        let result = if self.match_kind(&[TokenKind::Var]).is_some() {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                trace!(%error, line = error.token.line, "recovering from syntax error");
                self.report(&error);
                self.synchronize();
                None
            },
        }
    }

    /// Parses `var <identifier> ( = <expression> )? ;` after the `var`
    /// keyword.
    fn var_declaration(&mut self) -> ParseResult<Statement> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?
                       .clone();

        let initializer = if self.match_kind(&[TokenKind::Equal]).is_some() {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Statement::VariableDeclaration { name, initializer })
    }

    /// Parses a print statement, a block or an expression statement.
    fn statement(&mut self) -> ParseResult<Statement> {
        if self.match_kind(&[TokenKind::Print]).is_some() {
            return self.print_statement();
        }
        if self.match_kind(&[TokenKind::LeftBrace]).is_some() {
            return Ok(Statement::Block { statements: self.block()? });
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Statement::Print { expr })
    }

    fn expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Statement::Expression { expr })
    }

    /// Parses the declarations of a block up to and including the closing
    /// brace. The opening brace has already been consumed.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// Malformed declarations inside the block are recovered individually and
    /// do not abandon the block.
    fn block(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
