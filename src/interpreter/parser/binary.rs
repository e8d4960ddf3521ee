use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_, '_> {
    /// Parses equality operators.
    ///
    /// The rule is: `equality := comparison (("==" | "!=") comparison)*`
    pub(in crate::interpreter::parser) fn equality(&mut self) -> ParseResult<Expr> {
        self.left_associative(Self::comparison,
                              &[BinaryOperator::Equal, BinaryOperator::NotEqual])
    }

    /// Parses relational operators.
    ///
    /// The rule is: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(Self::term,
                              &[BinaryOperator::Greater,
                                BinaryOperator::GreaterEqual,
                                BinaryOperator::Less,
                                BinaryOperator::LessEqual])
    }

    /// Parses addition and subtraction.
    ///
    /// The rule is: `term := factor (("+" | "-") factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        self.left_associative(Self::factor, &[BinaryOperator::Add, BinaryOperator::Sub])
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `factor := unary (("*" | "/") unary)*`
    fn factor(&mut self) -> ParseResult<Expr> {
        self.left_associative(Self::unary, &[BinaryOperator::Mul, BinaryOperator::Div])
    }

    /// Parses one left-associative level of the ladder: an `operand`,
    /// followed by any number of `operators` each with another `operand`.
    fn left_associative(&mut self,
                        operand: fn(&mut Self) -> ParseResult<Expr>,
                        operators: &[BinaryOperator])
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;
        loop {
            let operator = self.peek();
            if let Some(op) = token_to_binary_operator(operator.kind)
               && operators.contains(&op)
            {
                self.advance();
                let right = operand(self)?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      operator: operator.clone(),
                                      right: Box::new(right) };
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all kinds that are not binary operators.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::BangEqual),
///            Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
