/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into a
/// program. Parse errors are collected rather than raised: the parser records
/// one and keeps going with the next statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the taxonomy of failures the evaluator can report, such as type
/// mismatches and unknown operators. They reach the caller as `Error` objects
/// through the ordinary evaluation result.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
