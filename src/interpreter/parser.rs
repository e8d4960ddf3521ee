/// Parser state, entry point and error recovery.
///
/// Holds the token cursor, the `parse` entry point, the assignment rule at the
/// bottom of the precedence ladder and the re-synchronization logic.
pub mod core;

/// Declaration and statement rules.
///
/// Parses `var` declarations, `print` statements, blocks and expression
/// statements, recovering from syntax errors one declaration at a time.
pub mod statement;

/// Binary operator rules.
///
/// Implements the left-associative levels of the precedence ladder:
/// equality, comparison, term and factor.
pub mod binary;

/// Unary and primary expression rules.
///
/// Parses prefix operators, literals, variable references and groupings.
pub mod unary;
