//! # kestrel
//!
//! kestrel is a small, expression-oriented scripting language written in
//! Rust. Source text is tokenized, parsed into an abstract syntax tree by a
//! Pratt parser, and evaluated by a tree-walking evaluator over integers,
//! booleans, null and first-class functions.
//!
//! Syntax errors are collected by the parser, while runtime failures are
//! ordinary values: evaluating `5 + true` yields an error object whose message
//! is `type mismatch: INTEGER + BOOLEAN`.

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

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::core::Context, lexer::Token, object::Object, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to AST nodes.
/// - Renders every node in a canonical, fully parenthesized string form.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines the parse errors collected by the parser, with their line.
/// - Defines the runtime errors whose messages become error objects.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime value
/// representation.
pub mod interpreter;
/// Stack growth for the recursive parser and evaluator.
pub mod stack;

/// Converts source text into `(Token, line)` pairs.
///
/// See [`interpreter::lexer::tokenize`].
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    interpreter::lexer::tokenize(source)
}

/// Parses source text into a program.
///
/// A program is always returned, together with every syntax error found. The
/// program is only meaningful when the error list is empty.
///
/// # Examples
/// ```
/// let (program, errors) = kestrel::parse("a + b * c");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(a + (b * c))");
///
/// let (_, errors) = kestrel::parse("let = 5;");
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(),
///            "Error on line 1: Expected an identifier, found '='.");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let tokens = tokenize(source);
    let mut parser = Parser::new(&tokens);
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Parses and evaluates source text in the given context.
///
/// Bindings made by the source are kept in `context`, so successive calls see
/// each other's `let` statements.
///
/// # Returns
/// The value of the program. A runtime failure is an `Ok` holding an
/// [`Object::Error`].
///
/// # Errors
/// Returns every syntax error if the source does not parse; nothing is
/// evaluated in that case.
///
/// # Examples
/// ```
/// use kestrel::{evaluate_source, interpreter::evaluator::Context};
///
/// let mut context = Context::new();
///
/// let value = evaluate_source("if (1 < 2) { 10 } else { 20 }", &mut context).unwrap();
/// assert_eq!(value.to_string(), "10");
///
/// let value = evaluate_source("-true", &mut context).unwrap();
/// assert!(value.is_error());
/// assert_eq!(value.to_string(), "unknown operator: -BOOLEAN");
///
/// assert!(evaluate_source("let x 5;", &mut context).is_err());
/// ```
pub fn evaluate_source(source: &str, context: &mut Context) -> Result<Object, Vec<ParseError>> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(context.eval_program(&program))
}
