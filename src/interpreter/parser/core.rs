use std::{iter::Peekable, slice};

use tracing::debug;

use crate::{
    ast::Expression, error::ParseError, interpreter::lexer::Token, stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply expressions and blocks may nest.
///
/// Every nested expression, block and chained infix operator counts as one
/// level, which bounds the depth of the tree the parser builds.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A prefix parse function: parses an expression starting at the current
/// token.
pub type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> ParseResult<Expression>;

/// An infix parse function: continues the already parsed `left` expression
/// with the operator at the current token.
pub type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> ParseResult<Expression>;

/// Binding power of infix operators, lowest to highest.
///
/// The derived ordering is the precedence order, so `Sum < Product` holds and
/// the Pratt loop can compare levels directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level; binds nothing.
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Prefix `-x`, `!x`
    Prefix,
    /// Function application `f(x)`
    Call,
}

/// Turns a token sequence into a [`Program`](crate::ast::Program).
///
/// The parser never aborts on malformed input. A failed statement is recorded
/// in the error list and parsing resumes at the next token, so a program is
/// always produced. Callers must check [`Parser::errors`] before trusting it.
///
/// # Example
/// ```
/// use kestrel::interpreter::{lexer::tokenize, parser::Parser};
///
/// let tokens = tokenize("let x = 5; x * 2");
/// let mut parser = Parser::new(&tokens);
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = 5;(x * 2)");
/// ```
pub struct Parser<'a> {
    tokens:   Peekable<slice::Iter<'a, (Token, usize)>>,
    /// Number of tokens consumed so far; used to guarantee progress.
    consumed: usize,
    /// Line of the most recently consumed token.
    line:     usize,
    /// Current nesting level, bounded by [`MAX_NESTING_DEPTH`].
    depth:    usize,
    errors:   Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a token sequence produced by
    /// [`tokenize`](crate::interpreter::lexer::tokenize).
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens:   tokens.iter().peekable(),
               consumed: 0,
               line:     tokens.first().map_or(1, |(_, line)| *line),
               depth:    0,
               errors:   Vec::new(), }
    }

    /// Returns the errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Returns the current token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied().map(|(token, _)| token)
    }

    /// Consumes and returns the current token with its line.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<(&'a Token, usize)> {
        let (token, line) = self.tokens.next()?;
        self.consumed += 1;
        self.line = *line;
        Some((token, *line))
    }

    /// Line of the current token, or of the last consumed one at end of input.
    pub(in crate::interpreter::parser) fn current_line(&mut self) -> usize {
        self.tokens.peek().map_or(self.line, |(_, line)| *line)
    }

    /// Consumes the current token, which must equal `expected`.
    ///
    /// # Returns
    /// The line of the consumed token.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a different token is found. The offending token
    ///   is consumed.
    /// - `UnexpectedEndOfInput` if the input is exhausted.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: &Token,
                                                 description: &'static str)
                                                 -> ParseResult<usize> {
        match self.advance() {
            Some((token, line)) if token == expected => Ok(line),
            Some((token, line)) => Err(ParseError::UnexpectedToken { expected: description,
                                                                     found: token.to_string(),
                                                                     line }),
            None => Err(ParseError::UnexpectedEndOfInput { expected: description,
                                                           line:     self.line, }),
        }
    }

    /// Consumes a `;` if one is next. A missing terminator is not an error.
    pub(in crate::interpreter::parser) fn skip_semicolon(&mut self) {
        if let Some(Token::Semicolon) = self.peek() {
            self.advance();
        }
    }

    /// Records a failed statement and makes sure the parser moved past at
    /// least one token since `consumed_before`.
    pub(in crate::interpreter::parser) fn record_error(&mut self,
                                                       error: ParseError,
                                                       consumed_before: usize) {
        debug!(%error, "recorded parse error");
        self.errors.push(error);
        if self.consumed == consumed_before {
            self.advance();
        }
    }

    /// Enters one more nesting level.
    ///
    /// # Errors
    /// `NestingTooDeep` once the level exceeds [`MAX_NESTING_DEPTH`].
    pub(in crate::interpreter::parser) fn descend(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line:  self.current_line(), });
        }
        Ok(())
    }

    /// Runs `parse` one nesting level deeper and restores the level afterwards,
    /// whether or not `parse` succeeded.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self)
                                                                       -> ParseResult<T>)
                                                    -> ParseResult<T> {
        let depth = self.depth;
        let result = ensure_sufficient_stack(|| {
            self.descend()?;
            parse(self)
        });
        self.depth = depth;
        result
    }

    /// Returns the number of tokens consumed so far.
    pub(in crate::interpreter::parser) const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// This is the Pratt loop. The prefix parse function for the current token
    /// builds the left operand. Then, while the next token is an infix operator
    /// whose precedence is strictly greater than `precedence`, the matching
    /// infix parse function extends the left operand. The strict comparison
    /// makes operators of equal precedence associate to the left:
    /// `a - b - c` parses as `((a - b) - c)`.
    ///
    /// # Errors
    /// - `NoPrefixParseFunction` if no expression can start at the current
    ///   token. The token is consumed.
    /// - `UnexpectedEndOfInput` if the input is exhausted.
    /// - `NestingTooDeep` if the expression nests deeper than
    ///   [`MAX_NESTING_DEPTH`].
    /// - Propagates any errors from prefix and infix parse functions.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        self.nested(|parser| parser.parse_expression_at(precedence))
    }

    /// The Pratt loop proper, run one nesting level down.
    fn parse_expression_at(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let Some(token) = self.peek() else {
            return Err(ParseError::UnexpectedEndOfInput { expected: "an expression",
                                                          line:     self.line, });
        };

        let Some(prefix) = prefix_parse_fn(token) else {
            let line = self.current_line();
            self.advance();
            return Err(ParseError::NoPrefixParseFunction { token: token.to_string(),
                                                           line });
        };

        let mut left = prefix(self)?;

        while let Some(token) = self.peek()
              && precedence < token_precedence(token)
              && let Some(infix) = infix_parse_fn(token)
        {
            self.descend()?;
            left = infix(self, left)?;
        }

        Ok(left)
    }
}

/// The prefix dispatch table.
///
/// Maps a token kind to the function that parses an expression starting with
/// it. `None` means no expression can start with this token.
#[must_use]
pub fn prefix_parse_fn<'a>(token: &Token) -> Option<PrefixParseFn<'a>> {
    match token {
        Token::Identifier(_) => Some(Parser::parse_identifier_expression),
        Token::Integer(_) => Some(Parser::parse_integer_literal),
        Token::True | Token::False => Some(Parser::parse_boolean_literal),
        Token::Bang | Token::Minus => Some(Parser::parse_prefix_expression),
        Token::LParen => Some(Parser::parse_grouped_expression),
        Token::If => Some(Parser::parse_if_expression),
        Token::Function => Some(Parser::parse_function_literal),
        _ => None,
    }
}

/// The infix dispatch table.
///
/// Maps a token kind to the function that continues an expression with it.
#[must_use]
pub fn infix_parse_fn<'a>(token: &Token) -> Option<InfixParseFn<'a>> {
    match token {
        Token::Plus
        | Token::Minus
        | Token::Star
        | Token::Slash
        | Token::Less
        | Token::Greater
        | Token::EqualEqual
        | Token::BangEqual => Some(Parser::parse_infix_expression),
        Token::LParen => Some(Parser::parse_call_expression),
        _ => None,
    }
}

/// Returns the binding power of `token` in infix position.
///
/// Tokens that cannot continue an expression have [`Precedence::Lowest`],
/// which stops the Pratt loop.
///
/// # Example
/// ```
/// use kestrel::interpreter::{
///     lexer::Token,
///     parser::{Precedence, core::token_precedence},
/// };
///
/// assert_eq!(token_precedence(&Token::Star), Precedence::Product);
/// assert_eq!(token_precedence(&Token::LParen), Precedence::Call);
/// assert_eq!(token_precedence(&Token::Semicolon), Precedence::Lowest);
/// ```
#[must_use]
pub const fn token_precedence(token: &Token) -> Precedence {
    match token {
        Token::EqualEqual | Token::BangEqual => Precedence::Equals,
        Token::Less | Token::Greater => Precedence::LessGreater,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Star | Token::Slash => Precedence::Product,
        Token::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}
