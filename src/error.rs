/// Lexing and parsing errors.
///
/// Defines the faults raised while scanning and parsing source code. Both are
/// recoverable: they are converted to diagnostics where they occur and never
/// abort a scan or parse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the faults raised during evaluation: operand type mismatches and
/// scoping violations. A runtime error halts the current `interpret` call.
pub mod runtime_error;

pub use parse_error::{LexicalError, ParseError};
pub use runtime_error::RuntimeError;
