use crate::{
    ast::{Expr, LiteralValue, Statement},
    util::num::format_number,
};

/// Renders an expression in parenthesized prefix form.
///
/// # Example
/// ```
/// use treelox::{
///     ast::printer::print_expr,
///     diagnostics::Diagnostics,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("(5 - (3 - 1)) + -1;", &mut diagnostics);
/// let program = parse(&tokens, &mut diagnostics);
///
/// let treelox::ast::Statement::Expression { expr } = &program[0] else {
///     panic!("expected an expression statement");
/// };
/// assert_eq!(print_expr(expr), "(+ (group (- 5 (group (- 3 1)))) (- 1))");
/// ```
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value } => print_literal(value),
        Expr::Grouping { expr } => parenthesize("group", &[&**expr]),
        Expr::Unary { op, operand, .. } => parenthesize(&op.to_string(), &[&**operand]),
        Expr::Binary { left, op, right, .. } => parenthesize(&op.to_string(), &[&**left, &**right]),
        Expr::Variable { name } => parenthesize(&name.lexeme, &[]),
        Expr::Assign { name, value } => parenthesize(&format!("= {}", name.lexeme), &[&**value]),
    }
}

/// Renders a statement in parenthesized prefix form.
///
/// Expression statements print as `(; expr)`, declarations as `(var name
/// init)` and blocks as `(block ...)` with their statements in order.
#[must_use]
pub fn print_statement(statement: &Statement) -> String {
    match statement {
        Statement::Expression { expr } => format!("(; {})", print_expr(expr)),
        Statement::Print { expr } => format!("(print {})", print_expr(expr)),
        Statement::VariableDeclaration { name, initializer } => match initializer {
            Some(init) => format!("(var {} {})", name.lexeme, print_expr(init)),
            None => format!("(var {})", name.lexeme),
        },
        Statement::Block { statements } => {
            let mut out = String::from("(block");
            for statement in statements {
                out.push(' ');
                out.push_str(&print_statement(statement));
            }
            out.push(')');
            out
        },
    }
}

fn print_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Nil => "nil".to_string(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Number(n) => format_number(*n),
        LiteralValue::String(s) => s.to_string(),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = format!("({name}");
    for expr in exprs {
        out.push(' ');
        out.push_str(&print_expr(expr));
    }
    out.push(')');
    out
}
