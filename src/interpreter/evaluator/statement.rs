use std::io::Write;

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// # Errors
    /// Any runtime fault raised while evaluating the statement's expressions,
    /// a duplicate declaration, or a failure to write `print` output.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Expression { expr } => {
                self.evaluate(expr)?;
                Ok(())
            },
            Statement::Print { expr } => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{value}")?;
                Ok(())
            },
            Statement::VariableDeclaration { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                trace!(name = %name.lexeme, kind = value.type_name(), "defining variable");
                self.environment.define(name, value)
            },
            Statement::Block { statements } => self.execute_block(statements),
        }
    }

    /// Executes `statements` in a fresh scope nested in the current one.
    ///
    /// The scope is closed again whether the statements complete or a fault
    /// propagates out of them.
    pub fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        self.environment.push_scope();
        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));
        self.environment.pop_scope();
        result
    }
}
