use tracing::trace;

use crate::{
    ast::{Program, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the whole token sequence into a [`Program`].
    ///
    /// Statements are parsed until the input is exhausted. A statement that
    /// fails to parse is left out of the program; its error is recorded and
    /// parsing resumes after the offending token. A stray `;` is an empty
    /// statement and is skipped.
    ///
    /// # Returns
    /// The program, possibly with fewer statements than the source when errors
    /// were recorded.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while let Some(token) = self.peek() {
            if *token == Token::Semicolon {
                self.advance();
                continue;
            }
            let before = self.consumed();
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.record_error(error, before),
            }
        }

        Program { statements }
    }

    /// Parses a single statement.
    ///
    /// The leading token decides the form:
    /// - `let` starts a binding,
    /// - `return` starts a return statement,
    /// - anything else is parsed as an expression statement.
    ///
    /// A trailing `;` is consumed when present; its absence is not an error.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        trace!(token = ?self.peek(), line, "parse_statement");

        match self.peek() {
            Some(Token::Let) => self.parse_let_statement(),
            Some(Token::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the name or the `=` is missing.
    /// - Propagates any errors from the value expression.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Let, "'let'")?;
        let name = self.parse_identifier()?;
        self.expect(&Token::Assign, "'='")?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return <expression>`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Return, "'return'")?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value, line })
    }

    /// Parses an expression used as a statement.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { expr, line })
    }
}
