use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_, '_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is
    /// parsed as `!( -x )`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("-" | "!") unary
    ///            | primary
    /// ```
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        let operator = self.peek();
        if let Some(op) = token_to_unary_operator(operator.kind) {
            self.advance();
            let operand = self.unary()?;
            return Ok(Expr::Unary { op,
                                    operator: operator.clone(),
                                    operand: Box::new(operand) });
        }

        self.primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "true" | "false" | "nil" | NUMBER | STRING
    ///              | IDENTIFIER
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `Expect expression.` when the current token starts no expression.
    /// - `Expect ')' after expression.` for an unterminated grouping.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();

        let value = match token.kind {
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::Nil => LiteralValue::Nil,
            TokenKind::Number | TokenKind::String => {
                token.literal
                     .as_ref()
                     .map_or(LiteralValue::Nil, LiteralValue::from)
            },
            TokenKind::Identifier => {
                self.advance();
                return Ok(Expr::Variable { name: token.clone() });
            },
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::Grouping { expr: Box::new(expr) });
            },
            _ => return Err(ParseError::new(token, "Expect expression.")),
        };

        self.advance();
        Ok(Expr::Literal { value })
    }
}

/// Maps a token kind to its corresponding prefix operator.
#[must_use]
pub const fn token_to_unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Minus => Some(UnaryOperator::Negate),
        TokenKind::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}
