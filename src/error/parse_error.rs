#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// Description of what was expected, such as `'='`.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a token was still required.
    UnexpectedEndOfInput {
        /// Description of what was expected.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the current token.
    NoPrefixParseFunction {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Expressions or blocks are nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in 64 bits.
    InvalidIntegerLiteral {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::NoPrefixParseFunction { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::InvalidIntegerLiteral { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Expected {expected}, found '{found}'."),

            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Expected {expected}, found end of input."),

            Self::NoPrefixParseFunction { token, line } => write!(f,
                                                                  "Error on line {line}: No prefix parse function for '{token}'."),

            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Nesting exceeds the maximum depth of {limit}."),

            Self::InvalidIntegerLiteral { literal, line } => write!(f,
                                                                    "Error on line {line}: Could not parse {literal} as a 64-bit integer."),
        }
    }
}

impl std::error::Error for ParseError {}
