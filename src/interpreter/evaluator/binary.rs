use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Evaluates a binary operation on two already evaluated operands.
///
/// - `+` adds two numbers, or concatenates when at least one side is a
///   string and the other is a string or a number.
/// - `-`, `*`, `/` and the comparisons need two numbers. Division follows
///   IEEE-754, so dividing by zero yields an infinity or NaN.
/// - `==` and `!=` are defined for every pair of values; values of different
///   kinds are never equal.
///
/// # Errors
/// A type fault attributed to `operator` when the operands do not fit.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary,
///                   token::{Token, TokenKind},
///                   value::Value},
/// };
///
/// let plus = Token::new(TokenKind::Plus, "+", None, 1, 4);
///
/// let sum = eval_binary(BinaryOperator::Add, &plus, &Value::Number(1.0), &Value::Number(2.0));
/// assert_eq!(sum.unwrap(), Value::Number(3.0));
///
/// let text = eval_binary(BinaryOperator::Add, &plus, &Value::Number(10.0), &Value::from("px"));
/// assert_eq!(text.unwrap(), Value::from("10px"));
///
/// assert!(eval_binary(BinaryOperator::Add, &plus, &Value::Nil, &Value::Number(1.0)).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   operator: &Token,
                   left: &Value,
                   right: &Value)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => add(operator, left, right),
        BinaryOperator::Sub => numbers(operator, left, right).map(|(a, b)| Value::Number(a - b)),
        BinaryOperator::Mul => numbers(operator, left, right).map(|(a, b)| Value::Number(a * b)),
        BinaryOperator::Div => numbers(operator, left, right).map(|(a, b)| Value::Number(a / b)),
        BinaryOperator::Less => numbers(operator, left, right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOperator::LessEqual => {
            numbers(operator, left, right).map(|(a, b)| Value::Bool(a <= b))
        },
        BinaryOperator::Greater => numbers(operator, left, right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOperator::GreaterEqual => {
            numbers(operator, left, right).map(|(a, b)| Value::Bool(a >= b))
        },
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}

fn add(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(_), Value::String(_) | Value::Number(_))
        | (Value::Number(_), Value::String(_)) => Ok(Value::from(format!("{left}{right}"))),
        _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { operator: operator.clone() }),
    }
}

fn numbers(operator: &Token, left: &Value, right: &Value) -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: operator.clone() }),
    }
}
