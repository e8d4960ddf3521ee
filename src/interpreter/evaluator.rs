/// Core evaluation logic and interpreter state.
///
/// Contains the [`core::Interpreter`], its output sink, the expression
/// dispatcher and runtime fault propagation.
pub mod core;

/// Statement execution.
///
/// Runs expression, print, declaration and block statements, opening and
/// closing block scopes.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;
