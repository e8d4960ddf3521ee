use std::io::{self, Stdout, Write};

use tracing::{debug, instrument};

use crate::{
    ast::{Expr, Statement},
    diagnostics::Diagnostics,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of a program.
///
/// This struct holds the variable [`Environment`] and the sink `print`
/// statements write to. The global scope persists across calls to
/// [`Interpreter::interpret`], so an interactive session can build on the
/// declarations of earlier lines.
///
/// ## Usage
///
/// `Interpreter::new()` prints to standard output; `with_output` accepts any
/// writer, which is how tests capture program output.
///
/// ```
/// use treelox::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::with_output(Vec::new());
/// let diagnostics = run("var a = 2; print a * 21;", &mut interpreter);
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(interpreter.output(), b"42\n");
/// ```
pub struct Interpreter<W: Write = Stdout> {
    pub(super) environment: Environment,
    pub(super) out:         W,
}

impl Interpreter<Stdout> {
    /// Creates an interpreter with an empty global scope that prints to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope that prints to
    /// `out`.
    pub fn with_output(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes a program.
    ///
    /// Statements run in order. The first runtime fault is reported to
    /// `diagnostics` and stops the rest of the program; output written
    /// before the fault is kept, and so are the global bindings made so far.
    ///
    /// # Parameters
    /// - `statements`: The parsed program.
    /// - `diagnostics`: Receives the runtime fault, if any.
    #[instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Statement], diagnostics: &mut Diagnostics) {
        let outcome = statements.iter()
                                .try_for_each(|statement| self.execute(statement));
        let flushed = self.out.flush().map_err(RuntimeError::from);

        if let Err(error) = outcome.and(flushed) {
            debug!(%error, "interpretation halted");
            diagnostics.runtime_error(&error);
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant. Operands are
    /// evaluated left to right before the operator is applied; assignment
    /// evaluates its right-hand side first and yields the assigned value.
    ///
    /// # Errors
    /// Type faults from operators and scoping faults from variable access.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Unary { op,
                          operator,
                          operand, } => {
                let value = self.evaluate(operand)?;
                eval_unary(*op, operator, &value)
            },
            Expr::Binary { left,
                           op,
                           operator,
                           right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                eval_binary(*op, operator, &left, &right)
            },
            Expr::Variable { name } => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
        }
    }
}
