/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the node dispatch for statements and
/// expressions, and the propagation of errors and pending returns.
pub mod core;

/// Name bindings.
///
/// Defines the `Environment` that maps names to values and chains to an
/// enclosing environment for closures.
pub mod environment;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Infix operator evaluation logic.
///
/// Handles integer arithmetic and comparisons, boolean equality, and the type
/// errors for every other combination.
pub mod binary;

/// Function evaluation.
///
/// Creates function values from literals and applies them to arguments.
pub mod function;

/// Utility functions for evaluation.
///
/// Blocks, conditionals and identifier lookup.
pub mod utils;

pub use self::core::{Context, eval};
