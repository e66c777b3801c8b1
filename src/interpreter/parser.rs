/// The parser state, the precedence table and the Pratt expression loop.
///
/// Contains the token cursor, error accumulation, and the prefix/infix
/// dispatch tables keyed by token kind.
pub mod core;

/// Statement parsing.
///
/// Parses whole programs and the three statement forms: `let`, `return` and
/// expression statements.
pub mod statement;

/// Prefix parse functions.
///
/// Everything that can begin an expression: literals, identifiers, prefix
/// operators, grouping, `if` and function literals.
pub mod prefix;

/// Infix parse functions.
///
/// Binary operators and call syntax, which continue an expression that has
/// already been parsed.
pub mod infix;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` and `fn`.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and identifiers.
pub mod utils;

pub use self::core::{Parser, Precedence};
