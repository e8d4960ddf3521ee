/// The environment module stores variable bindings.
///
/// Scopes form a chain from the innermost block out to the global scope.
/// Declarations bind in the innermost scope; reads and assignments resolve
/// to the nearest scope that binds the name.
pub mod environment;
/// The evaluator module executes statements and computes values.
///
/// The evaluator walks the syntax tree produced by the parser, evaluates
/// expressions, writes `print` output and manages block scopes.
///
/// # Responsibilities
/// - Evaluates expressions according to the language's type rules.
/// - Executes statements in order, opening a scope for each block.
/// - Raises runtime faults for type and scoping violations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Skips whitespace and comments.
/// - Reports lexical errors for invalid or malformed input without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs the statements and expressions of the program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, reporting errors with location info.
/// - Recovers after an error so that later errors are reported too.
pub mod parser;
/// Token kinds and the token record shared by the lexer and the parser.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// Every expression evaluates to a [`value::Value`]: `nil`, a boolean, a
/// number or a string.
pub mod value;
