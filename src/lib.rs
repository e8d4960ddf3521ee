//! # treelox
//!
//! treelox is a tree-walking interpreter for a small, dynamically typed
//! scripting language. Source text is scanned into tokens, parsed into a
//! syntax tree, and evaluated directly, with lexically scoped variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    diagnostics::Diagnostics,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree, plus a printer that renders
/// trees as text. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the originating tokens on nodes that can fail at runtime.
pub mod ast;
/// Collects the errors reported while running source code.
///
/// Every stage reports into one [`diagnostics::Diagnostics`] value instead of
/// failing outright. Callers inspect it afterwards to tell a clean run from a
/// syntax error or a runtime error.
pub mod diagnostics;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Their `Display` output is the message shown to the
/// user.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Carries the token each error is attributed to, for positioning.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, variable storage and
/// evaluation to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by several phases.
pub mod util;

/// Scans, parses and executes `source` on `interpreter`.
///
/// Lexical and syntax errors are all collected; when there is at least one,
/// the program is not executed. Otherwise it runs until it finishes or hits
/// its first runtime error. Bindings made by the program remain in the
/// interpreter's global scope.
///
/// # Returns
/// The diagnostics reported while handling this source.
///
/// # Examples
/// ```
/// use treelox::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::with_output(Vec::new());
///
/// let diagnostics = run("print 10 + \"string\" + 15;", &mut interpreter);
/// assert!(diagnostics.is_empty());
///
/// // Syntax error: nothing is executed.
/// let diagnostics = run("print 1; print (2;", &mut interpreter);
/// assert!(diagnostics.had_error());
///
/// assert_eq!(interpreter.output(), b"10string15\n");
/// ```
pub fn run<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    let tokens = scan(source, &mut diagnostics);
    let program = parse(&tokens, &mut diagnostics);

    if diagnostics.had_error() {
        debug!(errors = diagnostics.len(), "skipping execution after syntax errors");
        return diagnostics;
    }

    interpreter.interpret(&program, &mut diagnostics);
    diagnostics
}
