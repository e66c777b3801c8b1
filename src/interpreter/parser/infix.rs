use crate::{
    ast::{Expression, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence, token_precedence},
    },
};

impl Parser<'_> {
    /// Parses the right-hand side of a binary operation.
    ///
    /// The right operand is parsed at the operator's own precedence. Because
    /// the Pratt loop only continues on strictly higher precedence, a
    /// following operator of the same level is left for the caller, which
    /// makes `a + b + c` associate to the left: `((a + b) + c)`.
    ///
    /// # Parameters
    /// - `left`: The already parsed left operand.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let Some((token, line)) = self.advance() else {
            return Err(ParseError::UnexpectedEndOfInput { expected: "an operator",
                                                          line:     self.current_line(), });
        };
        let Some(operator) = token_to_infix_operator(token) else {
            return Err(ParseError::UnexpectedToken { expected: "an operator",
                                                     found: token.to_string(),
                                                     line });
        };

        let right = self.parse_expression(token_precedence(token))?;

        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right),
                               line })
    }

    /// Parses a call: `(` following an expression applies it as a function.
    ///
    /// The argument list may be empty; arguments are full expressions.
    ///
    /// # Parameters
    /// - `callee`: The already parsed expression being called.
    ///
    /// # Errors
    /// `UnexpectedToken` if an argument is not followed by `,` or `)`.
    pub(crate) fn parse_call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        let line = self.expect(&Token::LParen, "'('")?;
        let arguments = self.parse_comma_separated(|parser| {
                                                       parser.parse_expression(Precedence::Lowest)
                                                   },
                                                   &Token::RParen,
                                                   "',' or ')'")?;

        Ok(Expression::Call { callee: Box::new(callee),
                              arguments,
                              line })
    }
}

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for tokens that are not binary operators, including `(`,
/// whose infix meaning is a call rather than an operator.
///
/// # Example
/// ```
/// use kestrel::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::infix::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
