use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation; any other operand is a type fault
///   attributed to `operator`.
/// - `Not`: negated truthiness, defined for every value.
///
/// # Example
/// ```
/// use treelox::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary,
///                   token::{Token, TokenKind},
///                   value::Value},
/// };
///
/// let minus = Token::new(TokenKind::Minus, "-", None, 1, 1);
/// let bang = Token::new(TokenKind::Bang, "!", None, 1, 1);
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &minus, &Value::Number(5.0)).unwrap(),
///            Value::Number(-5.0));
/// assert_eq!(eval_unary(UnaryOperator::Not, &bang, &Value::Nil).unwrap(),
///            Value::Bool(true));
/// assert!(eval_unary(UnaryOperator::Negate, &minus, &Value::from("a")).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, operator: &Token, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::OperandMustBeNumber { operator: operator.clone() }),
        },
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
