/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser and turns every node
/// into exactly one runtime value. Failures are values too, so evaluation
/// itself never aborts.
///
/// # Responsibilities
/// - Evaluates statements and expressions, including conditionals, function
///   literals and calls.
/// - Manages name bindings in nested environments.
/// - Propagates errors and pending returns up to the nearest boundary.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// corresponding to a language element such as an integer, an identifier, an
/// operator, a delimiter or a keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their line.
/// - Marks unrecognized input with an illegal token for the parser to report.
pub mod lexer;
/// The object module defines the runtime values produced by evaluation.
///
/// # Responsibilities
/// - Defines the `Object` enum and its type discriminator.
/// - Implements truthiness and the display rules for values.
/// - Provides the shared `true`, `false` and `null` values.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: every token kind maps to a prefix and/or
/// infix parse function, and infix operators are combined according to their
/// precedence.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Collects syntax errors with their line and keeps parsing after them.
pub mod parser;
