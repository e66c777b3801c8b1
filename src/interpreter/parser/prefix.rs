use crate::{
    ast::{Expression, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses an identifier used as an expression.
    pub(crate) fn parse_identifier_expression(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(self.parse_identifier()?))
    }

    /// Parses an integer literal.
    ///
    /// # Errors
    /// `InvalidIntegerLiteral` if the literal does not fit in an `i64`.
    pub(crate) fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        match self.advance() {
            Some((Token::Integer(literal), line)) => {
                let value =
                    literal.parse()
                           .map_err(|_| ParseError::InvalidIntegerLiteral { literal: literal.clone(),
                                                                            line })?;
                Ok(Expression::IntegerLiteral { value, line })
            },
            other => Err(unexpected(other, "an integer", self.current_line())),
        }
    }

    /// Parses `true` or `false`.
    pub(crate) fn parse_boolean_literal(&mut self) -> ParseResult<Expression> {
        match self.advance() {
            Some((Token::True, line)) => Ok(Expression::BooleanLiteral { value: true,
                                                                         line }),
            Some((Token::False, line)) => Ok(Expression::BooleanLiteral { value: false,
                                                                          line }),
            other => Err(unexpected(other, "a boolean", self.current_line())),
        }
    }

    /// Parses a prefix operation: `!<expr>` or `-<expr>`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `-a * b` parses as
    /// `((-a) * b)` while `!-a` nests as `(!(-a))`.
    pub(crate) fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let (operator, line) = match self.advance() {
            Some((Token::Bang, line)) => (PrefixOperator::Not, line),
            Some((Token::Minus, line)) => (PrefixOperator::Negate, line),
            other => return Err(unexpected(other, "'!' or '-'", self.current_line())),
        };
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { operator,
                                right: Box::new(right),
                                line })
    }

    /// Parses a parenthesized expression.
    ///
    /// The inner expression is parsed from [`Precedence::Lowest`] again, which
    /// is what lets parentheses override precedence: `2 / (5 + 5)`.
    ///
    /// # Errors
    /// `UnexpectedToken` if the closing `)` is missing.
    pub(crate) fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.expect(&Token::LParen, "'('")?;
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::RParen, "')'")?;

        Ok(expr)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> }
    ///     if (<condition>) { <statements> } else { <statements> }
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` if a parenthesis or brace is missing.
    /// - Propagates any errors from the condition or the blocks.
    pub(crate) fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let line = self.expect(&Token::If, "'if'")?;
        self.expect(&Token::LParen, "'('")?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::RParen, "')'")?;

        let consequence = self.parse_block()?;

        let alternative = if let Some(Token::Else) = self.peek() {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative,
                            line })
    }

    /// Parses a function literal: `fn(<parameters>) { <body> }`.
    ///
    /// The parameter list may be empty.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a parameter is not an identifier or a
    ///   delimiter is missing.
    /// - Propagates any errors from the body.
    pub(crate) fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let line = self.expect(&Token::Function, "'fn'")?;
        self.expect(&Token::LParen, "'('")?;
        let parameters =
            self.parse_comma_separated(Self::parse_identifier, &Token::RParen, "',' or ')'")?;
        let body = self.parse_block()?;

        Ok(Expression::FunctionLiteral { parameters,
                                         body,
                                         line })
    }
}

/// Builds the error for a dispatch that landed on the wrong token.
fn unexpected(found: Option<(&Token, usize)>, expected: &'static str, line: usize) -> ParseError {
    match found {
        Some((token, line)) => ParseError::UnexpectedToken { expected,
                                                             found: token.to_string(),
                                                             line },
        None => ParseError::UnexpectedEndOfInput { expected, line },
    }
}
